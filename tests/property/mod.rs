pub mod balance_proptest;
