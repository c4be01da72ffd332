pub mod simulated_zkapp_worker;
