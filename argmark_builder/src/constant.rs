// The reference layout: a form column of 18 characters before the help text.
pub(crate) const DEFAULT_COLUMN_WIDTH: usize = 18;
pub(crate) const FAILURE_EXIT_CODE: i32 = 1;
