//! 単語単位の変換処理を提供するモジュール。
//!
//! ワーカーは字母列と記号列のバッファを保持し、再利用することで
//! 単語ごとのメモリ割り当てを避けます。
use std::io::{self, Write};

use crate::decompose::Decompose;
use crate::phonemizer::{self, Phonemizer};
use crate::symbol::Symbol;

/// 単語の分解と分類を行う構造体。
///
/// # 例
///
/// ```ignore
/// let mut worker = phonemizer.new_worker();
/// worker.reset_word("사과");
/// worker.phonemize();
/// for symbol in worker.symbol_iter() {
///     println!("{symbol}");
/// }
/// ```
pub struct Worker<D> {
    pub(crate) phonemizer: Phonemizer<D>,
    pub(crate) word: String,
    pub(crate) graphemes: Vec<char>,
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) num_misses: usize,
    pub(crate) word_misses: usize,
}

impl<D> Worker<D>
where
    D: Decompose,
{
    pub(crate) fn new(phonemizer: Phonemizer<D>) -> Self {
        Self {
            phonemizer,
            word: String::new(),
            graphemes: vec![],
            symbols: vec![],
            num_misses: 0,
            word_misses: 0,
        }
    }

    /// 変換する単語をリセットします。
    ///
    /// 以前の結果をクリアし、新しい単語を字母列に分解します。
    /// 分類は[`phonemize`](Self::phonemize)を呼び出すまで行われません。
    ///
    /// # 引数
    ///
    /// * `input` - 変換する単語
    pub fn reset_word<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.word.clear();
        self.graphemes.clear();
        self.symbols.clear();
        self.word_misses = 0;
        let input = input.as_ref();
        if !input.is_empty() {
            self.word.push_str(input);
            self.phonemizer
                .decomposer()
                .decompose(&self.word, &mut self.graphemes);
        }
    }

    /// 設定された単語の字母列を分類します。
    ///
    /// 記号表に含まれない字母はリテラルとして出力され、その数が累積されます。
    /// 同じ単語に対して複数回呼び出しても、累積数は単語ごとに1回分だけ数えられます。
    pub fn phonemize(&mut self) {
        self.symbols.clear();
        phonemizer::classify(&self.graphemes, &mut self.symbols);

        let misses = self.symbols.iter().filter(|s| s.is_literal()).count();
        if misses != 0 {
            log::debug!(
                "{misses} grapheme(s) of {:?} passed through unclassified",
                self.word
            );
        }
        // Only this word's share of the total is replaced.
        self.num_misses = self.num_misses - self.word_misses + misses;
        self.word_misses = misses;
    }

    /// 現在の単語を返します。
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 現在の単語の字母列を返します。
    #[inline(always)]
    pub fn graphemes(&self) -> &[char] {
        &self.graphemes
    }

    /// 記号の数を返します。
    #[inline(always)]
    pub fn num_symbols(&self) -> usize {
        self.symbols.len()
    }

    /// `i`番目の記号を取得します。
    #[inline(always)]
    pub fn symbol(&self, i: usize) -> Symbol {
        self.symbols[i]
    }

    /// 記号列のイテレータを返します。
    #[inline(always)]
    pub fn symbol_iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// このワーカーが作成されてから分類できなかった字母の総数を返します。
    #[inline(always)]
    pub fn num_misses(&self) -> usize {
        self.num_misses
    }

    /// 記号列を空白区切りで書き出します。改行は書き出しません。
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合、[`io::Error`]が返されます。
    pub fn write_symbols<W>(&self, mut wtr: W) -> io::Result<()>
    where
        W: Write,
    {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i != 0 {
                wtr.write_all(b" ")?;
            }
            write!(wtr, "{symbol}")?;
        }
        Ok(())
    }

    /// 記号列を空白区切りの文字列として返します。
    pub fn symbols_to_string(&self) -> String {
        self.symbols
            .iter()
            .map(Symbol::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
