pub mod adj;
