mod analyze_test;
mod boundary_test;
mod history_test;
