pub mod daily_terminal;
