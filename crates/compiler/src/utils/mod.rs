pub(crate) use strings::*;

mod strings;
