//! 出力モジュール（共通ライブラリ）

pub mod xlsx_core;

pub use xlsx_core::generate_xlsx_buffer;
