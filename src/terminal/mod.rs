pub mod dispatcher;
pub mod session;
pub mod terminal;
pub mod types;

pub use dispatcher::{Dispatcher, DispatcherOptions};
pub use session::SessionCursor;
pub use terminal::{Terminal, TerminalOptions};
pub use types::{CommandRequest, CommandResponse};
