//! Device access through the Android Debug Bridge.
//!
//! [`AdbClient`] runs commands, [`output`] turns what they print into rows.

pub mod adb;
pub mod output;

pub use adb::{shell_command, shell_quote, AdbClient, AdbShell, ShellOutput};
pub use output::{parse_component_packages, parse_content_rows, ContentRow};
