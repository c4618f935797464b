mod show;

pub use show::*;
