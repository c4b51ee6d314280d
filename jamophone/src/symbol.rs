//! 音素記号表と記号型の定義
//!
//! このモジュールは、初声（`f`）・中声（`m`）・終声（`e`）の3つの固定記号表と、
//! 分類結果を表す[`Symbol`]型を提供します。
//!
//! 記号表はハングル互換字母（U+3131..=U+3163）で記述されており、
//! コンパイル時に構築される索引により、字母から各表内の位置を定数時間で引けます。

use std::fmt;
use std::str::FromStr;

use crate::errors::{JamophoneError, Result};

/// 初声（cho-seong）の記号表。19項目。
pub const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 中声（jung-seong）の記号表。21項目。
pub const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 終声（jong-seong）の記号表。27項目。
pub const FINALS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 3つの記号表に含まれる記号の総数
pub const NUM_SYMBOLS: usize = INITIALS.len() + VOWELS.len() + FINALS.len();

/// 互換字母ブロックのうち、記号表が使う範囲の先頭（`ㄱ`）
pub(crate) const JAMO_FIRST: char = '\u{3131}';
/// 互換字母ブロックのうち、記号表が使う範囲の末尾（`ㅣ`）
pub(crate) const JAMO_LAST: char = '\u{3163}';
const NUM_JAMO: usize = (JAMO_LAST as u32 - JAMO_FIRST as u32 + 1) as usize;

const INDEX_BITS: usize = 5;
const INDEX_MASK: u16 = (1 << INDEX_BITS) - 1;

/// 互換字母1文字の、各記号表内での位置
///
/// 3つの位置を16ビット整数にパックして保持します。
/// 表に含まれない場合は[`INDEX_MASK`]が格納されます。
///
/// # メモリレイアウト
///
/// ```text
/// initial = 5 ビット
///   vowel = 5 ビット
///   final = 5 ビット
/// ```
#[derive(Clone, Copy)]
struct JamoInfo(u16);

impl JamoInfo {
    const fn new(initial: u16, vowel: u16, final_: u16) -> Self {
        Self(initial | (vowel << INDEX_BITS) | (final_ << (2 * INDEX_BITS)))
    }

    #[inline(always)]
    const fn get(self, class: SymbolClass) -> Option<usize> {
        let shift = match class {
            SymbolClass::Initial => 0,
            SymbolClass::Vowel => INDEX_BITS,
            SymbolClass::Final => 2 * INDEX_BITS,
        };
        let idx = (self.0 >> shift) & INDEX_MASK;
        if idx == INDEX_MASK {
            None
        } else {
            Some(idx as usize)
        }
    }
}

const fn position(table: &[char], cp: u32) -> u16 {
    let mut i = 0;
    while i < table.len() {
        if table[i] as u32 == cp {
            return i as u16;
        }
        i += 1;
    }
    INDEX_MASK
}

const fn build_jamo_index() -> [JamoInfo; NUM_JAMO] {
    let mut index = [JamoInfo(0); NUM_JAMO];
    let mut i = 0;
    while i < NUM_JAMO {
        let cp = JAMO_FIRST as u32 + i as u32;
        index[i] = JamoInfo::new(
            position(&INITIALS, cp),
            position(&VOWELS, cp),
            position(&FINALS, cp),
        );
        i += 1;
    }
    index
}

static JAMO_INDEX: [JamoInfo; NUM_JAMO] = build_jamo_index();

/// 字母が指定されたクラスの記号表に含まれる場合、その位置を返します。
///
/// # 引数
///
/// * `c` - 検索する字母
/// * `class` - 検索対象の記号クラス
///
/// # 戻り値
///
/// 記号表内の0始まりの位置。含まれない場合は`None`
///
/// # 例
///
/// ```
/// use jamophone::symbol::{lookup, SymbolClass};
///
/// assert_eq!(lookup('ㄴ', SymbolClass::Initial), Some(2));
/// assert_eq!(lookup('ㄴ', SymbolClass::Final), Some(3));
/// assert_eq!(lookup('ㄴ', SymbolClass::Vowel), None);
/// assert_eq!(lookup('a', SymbolClass::Vowel), None);
/// ```
#[inline(always)]
pub fn lookup(c: char, class: SymbolClass) -> Option<usize> {
    if !(JAMO_FIRST..=JAMO_LAST).contains(&c) {
        return None;
    }
    JAMO_INDEX[(c as u32 - JAMO_FIRST as u32) as usize].get(class)
}

/// 字母が中声表に含まれるかどうかを返します。
#[inline(always)]
pub fn is_vowel(c: char) -> bool {
    lookup(c, SymbolClass::Vowel).is_some()
}

/// 記号クラス
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    /// 初声。接頭辞は`f`。
    Initial,
    /// 中声。接頭辞は`m`。
    Vowel,
    /// 終声。接頭辞は`e`。
    Final,
}

impl SymbolClass {
    /// 記号表の出力順に並べたすべてのクラス
    pub const ALL: [Self; 3] = [Self::Initial, Self::Vowel, Self::Final];

    /// 出力に使う接頭辞を返します。
    #[inline(always)]
    pub const fn prefix(self) -> char {
        match self {
            Self::Initial => 'f',
            Self::Vowel => 'm',
            Self::Final => 'e',
        }
    }

    /// 接頭辞からクラスを取得します。
    pub const fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'f' => Some(Self::Initial),
            'm' => Some(Self::Vowel),
            'e' => Some(Self::Final),
            _ => None,
        }
    }

    /// このクラスの記号表を返します。
    #[inline(always)]
    pub const fn table(self) -> &'static [char] {
        match self {
            Self::Initial => &INITIALS,
            Self::Vowel => &VOWELS,
            Self::Final => &FINALS,
        }
    }
}

/// 字母1つの分類結果
///
/// 記号表に含まれる字母は`<接頭辞><位置>`の形の[`Symbol::Tagged`]に、
/// どの記号表にも含まれない字母は[`Symbol::Literal`]としてそのまま保持されます。
/// [`Display`](fmt::Display)は出力ファイルに書き出される文字列と一致します。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// 記号表に含まれる字母
    Tagged {
        /// 記号クラス
        class: SymbolClass,
        /// 記号表内の位置
        index: u8,
    },
    /// どの記号表にも含まれない字母
    Literal(char),
}

impl Symbol {
    /// 記号クラスと位置から記号を生成します。
    ///
    /// # エラー
    ///
    /// `index`が記号表の範囲外の場合、[`JamophoneError`]が返されます。
    pub fn new(class: SymbolClass, index: usize) -> Result<Self> {
        if index >= class.table().len() {
            return Err(JamophoneError::invalid_argument(
                "index",
                format!(
                    "must be less than {} for the class `{}`",
                    class.table().len(),
                    class.prefix()
                ),
            ));
        }
        Ok(Self::tagged(class, index))
    }

    /// 範囲検査済みの位置から記号を生成します。
    #[inline(always)]
    pub(crate) const fn tagged(class: SymbolClass, index: usize) -> Self {
        debug_assert!(index < class.table().len());
        Self::Tagged {
            class,
            index: index as u8,
        }
    }

    /// 記号クラスを返します。リテラルの場合は`None`。
    #[inline(always)]
    pub const fn class(&self) -> Option<SymbolClass> {
        match self {
            Self::Tagged { class, .. } => Some(*class),
            Self::Literal(_) => None,
        }
    }

    /// 記号表内の位置を返します。リテラルの場合は`None`。
    #[inline(always)]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Tagged { index, .. } => Some(*index as usize),
            Self::Literal(_) => None,
        }
    }

    /// 記号が表す字母を返します。
    pub const fn grapheme(&self) -> char {
        match self {
            Self::Tagged { class, index } => class.table()[*index as usize],
            Self::Literal(c) => *c,
        }
    }

    /// リテラル（分類できなかった字母）かどうかを返します。
    #[inline(always)]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// 全記号を初声・中声・終声の順に列挙します。
    ///
    /// # 例
    ///
    /// ```
    /// use jamophone::symbol::{Symbol, NUM_SYMBOLS};
    ///
    /// let all: Vec<_> = Symbol::inventory().map(|s| s.to_string()).collect();
    /// assert_eq!(all.len(), NUM_SYMBOLS);
    /// assert_eq!(all[0], "f0");
    /// assert_eq!(all[19], "m0");
    /// assert_eq!(all[NUM_SYMBOLS - 1], "e26");
    /// ```
    pub fn inventory() -> impl Iterator<Item = Self> {
        SymbolClass::ALL.into_iter().flat_map(|class| {
            let len = class.table().len();
            (0..len).map(move |index| Self::tagged(class, index))
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tagged { class, index } => write!(f, "{}{}", class.prefix(), index),
            Self::Literal(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for Symbol {
    type Err = JamophoneError;

    /// 出力形式の文字列から記号をパースします。
    ///
    /// 1文字の文字列はリテラルとして扱われます。
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let Some(head) = chars.next() else {
            return Err(JamophoneError::invalid_format("symbol", "empty string"));
        };
        let rest = chars.as_str();
        if rest.is_empty() {
            return Ok(Self::Literal(head));
        }
        let class = SymbolClass::from_prefix(head).ok_or_else(|| {
            JamophoneError::invalid_format("symbol", format!("unknown prefix `{head}` in {s:?}"))
        })?;
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JamophoneError::invalid_format(
                "symbol",
                format!("index must be decimal digits: {s:?}"),
            ));
        }
        let index: usize = rest.parse()?;
        if index >= class.table().len() {
            return Err(JamophoneError::invalid_format(
                "symbol",
                format!("index out of range: {s:?}"),
            ));
        }
        Ok(Self::tagged(class, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_indexed() {
        for class in SymbolClass::ALL {
            for (i, &c) in class.table().iter().enumerate() {
                assert_eq!(lookup(c, class), Some(i), "{c} in {class:?}");
            }
        }
    }

    #[test]
    fn test_consonant_tables_exclude_vowels() {
        for &c in &INITIALS {
            assert!(!is_vowel(c));
        }
        for &c in &FINALS {
            assert!(!is_vowel(c));
        }
    }

    #[test]
    fn test_lookup_outside_block() {
        assert_eq!(lookup('가', SymbolClass::Initial), None);
        assert_eq!(lookup('\u{3130}', SymbolClass::Initial), None);
        assert_eq!(lookup('\u{3164}', SymbolClass::Vowel), None);
        // Compound final only.
        assert_eq!(lookup('ㄳ', SymbolClass::Initial), None);
        assert_eq!(lookup('ㄳ', SymbolClass::Final), Some(2));
        // Double consonant that never closes a syllable.
        assert_eq!(lookup('ㄸ', SymbolClass::Initial), Some(4));
        assert_eq!(lookup('ㄸ', SymbolClass::Final), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::new(SymbolClass::Initial, 0).unwrap().to_string(), "f0");
        assert_eq!(Symbol::new(SymbolClass::Vowel, 20).unwrap().to_string(), "m20");
        assert_eq!(Symbol::new(SymbolClass::Final, 26).unwrap().to_string(), "e26");
        assert_eq!(Symbol::Literal('A').to_string(), "A");
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(Symbol::new(SymbolClass::Initial, 19).is_err());
        assert!(Symbol::new(SymbolClass::Vowel, 21).is_err());
        assert!(Symbol::new(SymbolClass::Final, 27).is_err());
    }

    #[test]
    fn test_grapheme() {
        assert_eq!(Symbol::new(SymbolClass::Final, 2).unwrap().grapheme(), 'ㄳ');
        assert_eq!(Symbol::Literal('x').grapheme(), 'x');
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "m5".parse::<Symbol>().unwrap(),
            Symbol::new(SymbolClass::Vowel, 5).unwrap()
        );
        assert_eq!(
            "e26".parse::<Symbol>().unwrap(),
            Symbol::new(SymbolClass::Final, 26).unwrap()
        );
        assert_eq!("f".parse::<Symbol>().unwrap(), Symbol::Literal('f'));
        assert_eq!("ㅿ".parse::<Symbol>().unwrap(), Symbol::Literal('ㅿ'));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "".parse::<Symbol>(),
            Err(JamophoneError::InvalidFormat(_))
        ));
        assert!(matches!(
            "x1".parse::<Symbol>(),
            Err(JamophoneError::InvalidFormat(_))
        ));
        assert!(matches!(
            "f+1".parse::<Symbol>(),
            Err(JamophoneError::InvalidFormat(_))
        ));
        assert!(matches!(
            "f19".parse::<Symbol>(),
            Err(JamophoneError::InvalidFormat(_))
        ));
        assert!(matches!(
            "m99999999999999999999999".parse::<Symbol>(),
            Err(JamophoneError::ParseInt(_))
        ));
    }

    #[test]
    fn test_inventory_order() {
        let inventory: Vec<Symbol> = Symbol::inventory().collect();
        assert_eq!(inventory.len(), NUM_SYMBOLS);
        assert_eq!(inventory[18].to_string(), "f18");
        assert_eq!(inventory[19].to_string(), "m0");
        assert_eq!(inventory[39].to_string(), "m20");
        assert_eq!(inventory[40].to_string(), "e0");
    }
}
