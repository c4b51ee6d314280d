//! 字母分解
//!
//! 単語を初声・中声・終声の字母列に分解する機能を提供します。
//! 分類器は[`Decompose`]トレイトのみに依存するため、
//! 任意の分解器（テスト用のスタブを含む）を差し替えて使用できます。

use crate::symbol::{FINALS, INITIALS, JAMO_FIRST, JAMO_LAST, VOWELS};

const SYLLABLE_FIRST: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const NUM_VOWELS: u32 = VOWELS.len() as u32;
// Includes the "no final" slot at offset 0.
const NUM_FINAL_SLOTS: u32 = FINALS.len() as u32 + 1;

/// 単語を字母列に分解する機能
///
/// 実装は、音節ブロックの順序と、各ブロック内の初声・中声・終声の順序を
/// 保ったまま字母を`out`に追記しなければなりません。
pub trait Decompose {
    /// `word`を分解し、得られた字母を`out`の末尾に追加します。
    ///
    /// # 引数
    ///
    /// * `word` - 分解する単語
    /// * `out` - 字母の追加先
    fn decompose(&self, word: &str, out: &mut Vec<char>);
}

/// ハングル音節を互換字母に分解する標準の分解器
///
/// - 完成形音節（U+AC00..=U+D7A3）は初声・中声・（あれば）終声に分解されます。
/// - 互換字母（`ㄱ`..=`ㅣ`）はそのまま出力されます。
/// - それ以外の文字は、Latin-1の範囲内であれば保持され、範囲外であれば捨てられます。
///   [`latin_filter`](Self::latin_filter)を無効にすると、すべての文字が保持されます。
///
/// 保持された非字母文字は、分類時にリテラルとして出力されます。
///
/// # 例
///
/// ```
/// use jamophone::decompose::{Decompose, HangulDecomposer};
///
/// let decomposer = HangulDecomposer::new();
/// let mut graphemes = vec![];
/// decomposer.decompose("닭이", &mut graphemes);
/// assert_eq!(graphemes, vec!['ㄷ', 'ㅏ', 'ㄺ', 'ㅇ', 'ㅣ']);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HangulDecomposer {
    latin_filter: bool,
}

impl Default for HangulDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl HangulDecomposer {
    /// Latin-1フィルタを有効にした分解器を作成します。
    pub const fn new() -> Self {
        Self { latin_filter: true }
    }

    /// ハングル以外の文字をLatin-1の範囲に制限するかどうかを設定します。
    ///
    /// デフォルトでは有効です。
    ///
    /// # 引数
    ///
    /// * `yes` - `false`の場合、ハングル以外のすべての文字を保持します
    pub const fn latin_filter(mut self, yes: bool) -> Self {
        self.latin_filter = yes;
        self
    }

    #[inline(always)]
    fn keeps(&self, c: char) -> bool {
        (JAMO_FIRST..=JAMO_LAST).contains(&c) || !self.latin_filter || (c as u32) <= 0xFF
    }
}

impl Decompose for HangulDecomposer {
    fn decompose(&self, word: &str, out: &mut Vec<char>) {
        for c in word.chars() {
            if let Some((initial, vowel, final_)) = split_syllable(c) {
                out.push(INITIALS[initial]);
                out.push(VOWELS[vowel]);
                if let Some(final_) = final_ {
                    out.push(FINALS[final_]);
                }
            } else if self.keeps(c) {
                out.push(c);
            }
        }
    }
}

/// 完成形音節を初声・中声・終声の記号表内の位置に分割します。
///
/// # 戻り値
///
/// `(初声, 中声, 終声)`の位置。終声がない場合は`None`。
/// `c`が完成形音節でない場合は`None`を返します。
///
/// # 例
///
/// ```
/// use jamophone::decompose::split_syllable;
///
/// assert_eq!(split_syllable('각'), Some((0, 0, Some(0))));
/// assert_eq!(split_syllable('하'), Some((18, 0, None)));
/// assert_eq!(split_syllable('ㄱ'), None);
/// ```
pub fn split_syllable(c: char) -> Option<(usize, usize, Option<usize>)> {
    let cp = c as u32;
    if !(SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&cp) {
        return None;
    }
    let offset = cp - SYLLABLE_FIRST;
    let initial = offset / (NUM_VOWELS * NUM_FINAL_SLOTS);
    let vowel = (offset / NUM_FINAL_SLOTS) % NUM_VOWELS;
    let final_ = offset % NUM_FINAL_SLOTS;
    Some((
        initial as usize,
        vowel as usize,
        final_.checked_sub(1).map(|t| t as usize),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose(decomposer: &HangulDecomposer, word: &str) -> String {
        let mut out = vec![];
        decomposer.decompose(word, &mut out);
        out.into_iter().collect()
    }

    #[test]
    fn test_syllable_bounds() {
        assert_eq!(split_syllable('가'), Some((0, 0, None)));
        assert_eq!(split_syllable('힣'), Some((18, 20, Some(26))));
        assert_eq!(split_syllable('\u{ABFF}'), None);
        assert_eq!(split_syllable('\u{D7A4}'), None);
    }

    #[test]
    fn test_decompose_words() {
        let d = HangulDecomposer::new();
        assert_eq!(decompose(&d, "각"), "ㄱㅏㄱ");
        assert_eq!(decompose(&d, "안녕"), "ㅇㅏㄴㄴㅕㅇ");
        assert_eq!(decompose(&d, "값"), "ㄱㅏㅄ");
        assert_eq!(decompose(&d, "뛰어"), "ㄸㅟㅇㅓ");
        assert_eq!(decompose(&d, ""), "");
    }

    #[test]
    fn test_decompose_appends() {
        let d = HangulDecomposer::new();
        let mut out = vec!['x'];
        d.decompose("가", &mut out);
        assert_eq!(out, vec!['x', 'ㄱ', 'ㅏ']);
    }

    #[test]
    fn test_compat_jamo_passthrough() {
        let d = HangulDecomposer::new();
        assert_eq!(decompose(&d, "ㅋㅋ"), "ㅋㅋ");
        assert_eq!(decompose(&d, "ㄳ"), "ㄳ");
    }

    #[test]
    fn test_jamo_range_covers_tables() {
        let d = HangulDecomposer::new();
        for &c in INITIALS.iter().chain(&VOWELS).chain(&FINALS) {
            assert!(d.keeps(c), "{c}");
        }
        assert!(!d.keeps(char::from_u32(JAMO_LAST as u32 + 1).unwrap()));
        assert!(!d.keeps(char::from_u32(JAMO_FIRST as u32 - 1).unwrap()));
    }

    #[test]
    fn test_latin_filter() {
        let d = HangulDecomposer::new();
        assert_eq!(decompose(&d, "A가é"), "Aㄱㅏé");
        assert_eq!(decompose(&d, "漢가"), "ㄱㅏ");
        assert_eq!(decompose(&d, "가\u{3164}"), "ㄱㅏ");

        let d = HangulDecomposer::new().latin_filter(false);
        assert_eq!(decompose(&d, "漢가"), "漢ㄱㅏ");
    }
}
