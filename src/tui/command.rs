use std::future::Future;
use std::pin::Pin;

/// Side effects an app asks the runtime to perform. Returned from
/// `update()`; the runtime executes them before processing further input.
pub enum Command<Msg> {
    /// Do nothing
    None,

    /// Execute multiple commands in sequence
    Batch(Vec<Command<Msg>>),

    /// Perform an async operation and deliver the result as a message
    Perform(Pin<Box<dyn Future<Output = Msg> + Send>>),

    /// Quit the application
    Quit,
}

impl<Msg> Command<Msg> {
    /// Helper to run an async operation and map its output to a message.
    pub fn perform<F, T>(future: F, to_msg: impl Fn(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        Msg: Send + 'static,
    {
        Command::Perform(Box::pin(async move {
            let result = future.await;
            to_msg(result)
        }))
    }

    pub fn batch(commands: Vec<Command<Msg>>) -> Self {
        Command::Batch(commands)
    }
}

impl<Msg> Default for Command<Msg> {
    fn default() -> Self {
        Command::None
    }
}
