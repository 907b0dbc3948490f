pub mod check_flower;
