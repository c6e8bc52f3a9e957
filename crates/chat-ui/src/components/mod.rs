pub mod nav;
pub mod toast;
