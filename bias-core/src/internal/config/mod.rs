pub mod gesture_table;
