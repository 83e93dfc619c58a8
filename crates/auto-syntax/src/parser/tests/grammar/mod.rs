mod control_tests;
mod expressions_tests;
mod nodes_tests;
mod statements_tests;
mod strings_tests;
