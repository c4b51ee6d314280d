//! 字母列を音素記号列に変換する分類器。
//!
//! このモジュールは、単語の字母列を初声（`f`）・中声（`m`）・終声（`e`）の
//! 記号に分類するメインの構造体を提供します。
//!
//! # 主要な構造体
//!
//! - [`Phonemizer`]: 分解器を保持し、ワーカーを生成する構造体
//! - [`Worker`]: 単語ごとの分解・分類を行うワーカー
//!
//! # 分類規則
//!
//! 位置`i`の字母は、次の順序で評価されます。
//!
//! 1. 中声表に含まれる場合は`m<位置>`
//! 2. 次の字母が存在し、それが中声表に含まれる場合は初声表を引いて`f<位置>`
//! 3. 終声表に含まれる場合は`e<位置>`
//! 4. いずれにも該当しない場合は字母そのもの
//!
//! 単語末尾の字母には次の字母が存在しないため、規則2は適用されません。
//!
//! # 例
//!
//! ```
//! use jamophone::Phonemizer;
//!
//! let phonemizer = Phonemizer::new();
//! let mut worker = phonemizer.new_worker();
//!
//! worker.reset_word("각");
//! worker.phonemize();
//! assert_eq!(worker.symbols_to_string(), "f0 m0 e0");
//!
//! worker.reset_word("안녕");
//! worker.phonemize();
//! assert_eq!(worker.symbols_to_string(), "f11 m0 e3 f2 m6 e20");
//! ```
pub mod worker;

use std::sync::Arc;

use crate::decompose::{Decompose, HangulDecomposer};
use crate::phonemizer::worker::Worker;
use crate::symbol::{self, Symbol, SymbolClass};

/// 字母の分類を行う構造体。
///
/// 分解器を`Arc`で保持するため、クローンは安価です。
/// 各[`Worker`]は独立したバッファを持つため、
/// 1つの`Phonemizer`から複数のワーカーを生成できます。
pub struct Phonemizer<D = HangulDecomposer> {
    decomposer: Arc<D>,
}

impl<D> Clone for Phonemizer<D> {
    fn clone(&self) -> Self {
        Self {
            decomposer: Arc::clone(&self.decomposer),
        }
    }
}

impl Phonemizer {
    /// 標準の[`HangulDecomposer`]を使用する分類器を作成します。
    pub fn new() -> Self {
        Self::with_decomposer(HangulDecomposer::new())
    }
}

impl Default for Phonemizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Phonemizer<D>
where
    D: Decompose,
{
    /// 指定された分解器を使用する分類器を作成します。
    ///
    /// # 引数
    ///
    /// * `decomposer` - 単語を字母列に分解する分解器
    ///
    /// # 例
    ///
    /// ```
    /// use jamophone::decompose::Decompose;
    /// use jamophone::Phonemizer;
    ///
    /// struct Fixed;
    ///
    /// impl Decompose for Fixed {
    ///     fn decompose(&self, _word: &str, out: &mut Vec<char>) {
    ///         out.push('ㅐ');
    ///     }
    /// }
    ///
    /// let mut worker = Phonemizer::with_decomposer(Fixed).new_worker();
    /// worker.reset_word("anything");
    /// worker.phonemize();
    /// assert_eq!(worker.symbols_to_string(), "m1");
    /// ```
    pub fn with_decomposer(decomposer: D) -> Self {
        Self {
            decomposer: Arc::new(decomposer),
        }
    }

    /// 共有された分解器から分類器を作成します。
    ///
    /// # 引数
    ///
    /// * `decomposer` - 共有される分解器への`Arc`参照
    pub fn from_shared_decomposer(decomposer: Arc<D>) -> Self {
        Self { decomposer }
    }

    /// 分解器への参照を取得します。
    #[inline(always)]
    pub fn decomposer(&self) -> &D {
        &self.decomposer
    }

    /// 新しいワーカーを作成します。
    pub fn new_worker(&self) -> Worker<D> {
        Worker::new(self.clone())
    }
}

/// 字母列の`i`番目の字母を分類します。
///
/// 分類は位置`i`と`i + 1`の字母のみに依存します。
///
/// # 引数
///
/// * `graphemes` - 単語の字母列
/// * `i` - 分類する位置
///
/// # パニック
///
/// `i`が`graphemes`の範囲外の場合、パニックします。
///
/// # 例
///
/// ```
/// use jamophone::phonemizer::classify_at;
///
/// let graphemes = ['ㄱ', 'ㅏ', 'ㄱ'];
/// assert_eq!(classify_at(&graphemes, 0).to_string(), "f0");
/// assert_eq!(classify_at(&graphemes, 1).to_string(), "m0");
/// assert_eq!(classify_at(&graphemes, 2).to_string(), "e0");
/// ```
pub fn classify_at(graphemes: &[char], i: usize) -> Symbol {
    let g = graphemes[i];
    if let Some(index) = symbol::lookup(g, SymbolClass::Vowel) {
        return Symbol::tagged(SymbolClass::Vowel, index);
    }
    // The last grapheme has no successor, so the look-ahead never applies to it.
    if graphemes.get(i + 1).is_some_and(|&next| symbol::is_vowel(next)) {
        return match symbol::lookup(g, SymbolClass::Initial) {
            Some(index) => Symbol::tagged(SymbolClass::Initial, index),
            None => Symbol::Literal(g),
        };
    }
    match symbol::lookup(g, SymbolClass::Final) {
        Some(index) => Symbol::tagged(SymbolClass::Final, index),
        None => Symbol::Literal(g),
    }
}

/// 字母列全体を分類し、結果を`out`の末尾に追加します。
///
/// # 引数
///
/// * `graphemes` - 単語の字母列
/// * `out` - 記号の追加先
pub fn classify(graphemes: &[char], out: &mut Vec<Symbol>) {
    out.reserve(graphemes.len());
    for i in 0..graphemes.len() {
        out.push(classify_at(graphemes, i));
    }
}
