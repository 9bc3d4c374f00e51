//! HTTP dispatch layer: the raw transport and the authenticated dispatcher
//! every resource operation funnels through.

pub mod dispatcher;
pub mod transport;

pub use dispatcher::Dispatcher;
pub use transport::Transport;
