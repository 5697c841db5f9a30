mod fallback_test;
mod students;
