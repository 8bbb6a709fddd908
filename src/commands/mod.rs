// Recursive traversals
pub mod du;
pub mod find;
pub mod remove;

// File management
pub mod chmod;
pub mod copy;
pub mod list;
pub mod mkdir;
pub mod mv;
pub mod touch;

// File viewing
pub mod cat;

// Environment and process
pub mod env;
pub mod ps;
pub mod pwd;
pub mod shell;
pub mod which;
pub mod whoami;

// Terminal
pub mod clear;
