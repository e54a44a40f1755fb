//! Built-in command handlers for the mnsh shell.
//!
//! One module per verb family, each exposing an `invoke` function with
//! the same shape: validate arguments, resolve paths, check
//! preconditions, perform the operation, then arm the undo ledger where
//! the operation is reversible. The [`dispatch`] module maps parsed
//! verbs to handlers and is the single place failures are reported and
//! audited.

pub mod archives;
pub mod cat;
pub mod cd;
pub mod cp;
pub mod dispatch;
pub mod grep;
pub mod history;
pub mod ls;
pub mod mv;
pub mod rm;
pub mod undo;

#[cfg(test)]
pub(crate) mod testutil;

pub use dispatch::execute_line;
