//! # jamophone
//!
//! jamophoneは、韓国語の単語リストから音声認識用の発音辞書を生成するライブラリです。
//!
//! ## 概要
//!
//! 各単語の音節を初声・中声・終声の字母に分解し、固定の記号表を用いて
//! 初声（`f`）・中声（`m`）・終声（`e`）の記号に変換します。
//! 記号は`<接頭辞><記号表内の位置>`の形式で、空白区切りで出力されます。
//!
//! ## 主な機能
//!
//! - **字母分解**: ハングル音節の互換字母への分解（[`decompose`]）
//! - **記号分類**: 先読み規則による初声・終声の判別（[`phonemizer`]）
//! - **辞書生成**: 単語リストからの一括変換と記号一覧の出力（[`lexicon`]）
//!
//! ## 使用例
//!
//! ```
//! use jamophone::Phonemizer;
//!
//! let phonemizer = Phonemizer::new();
//! let mut worker = phonemizer.new_worker();
//!
//! worker.reset_word("읽다");
//! worker.phonemize();
//! assert_eq!(worker.num_symbols(), 5);
//! assert_eq!(worker.symbols_to_string(), "f11 m20 e8 f3 m0");
//!
//! let s = worker.symbol(2);
//! assert_eq!(s.to_string(), "e8");
//! assert_eq!(s.grapheme(), 'ㄺ');
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// 字母分解
pub mod decompose;

/// エラー型の定義
pub mod errors;

/// 発音辞書の生成
pub mod lexicon;

/// 記号分類器
pub mod phonemizer;

/// 記号表と記号型
pub mod symbol;

#[cfg(test)]
mod tests;

// Re-exports
pub use decompose::{Decompose, HangulDecomposer};
pub use phonemizer::worker::Worker;
pub use phonemizer::Phonemizer;
pub use symbol::{Symbol, SymbolClass};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
