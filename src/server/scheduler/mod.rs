pub mod counter_refresh;
