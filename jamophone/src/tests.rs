//! jamophoneのテストモジュール群
//!
//! 分類器と発音辞書生成の動作を、固定の単語リストを用いて検証します。

mod phonemizer;
