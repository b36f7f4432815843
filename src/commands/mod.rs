pub mod paper_wallet;
