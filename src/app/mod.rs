pub mod menu;

pub use menu::MenuShell;
