pub mod easy_gjk;
