pub mod exp;
