use crate::decompose::{Decompose, HangulDecomposer};
use crate::phonemizer::Phonemizer;
use crate::symbol::{Symbol, SymbolClass};

/// Returns a fixed grapheme sequence regardless of the input word.
struct Stub(Vec<char>);

impl Decompose for Stub {
    fn decompose(&self, _word: &str, out: &mut Vec<char>) {
        out.extend_from_slice(&self.0);
    }
}

fn phonemize_with(graphemes: &str) -> String {
    let stub = Stub(graphemes.chars().collect());
    let mut worker = Phonemizer::with_decomposer(stub).new_worker();
    worker.reset_word("x");
    worker.phonemize();
    worker.symbols_to_string()
}

/// 子音・母音・子音の1音節
#[test]
fn test_stub_single_syllable() {
    assert_eq!(phonemize_with("ㄱㅏㄱ"), "f0 m0 e0");
}

/// 母音のみの単語
#[test]
fn test_stub_single_vowel() {
    assert_eq!(phonemize_with("ㅔ"), "m5");
}

/// どの記号表にも含まれない字母はそのまま出力される
#[test]
fn test_stub_unknown_grapheme() {
    assert_eq!(phonemize_with("ㅿ"), "ㅿ");
    assert_eq!(phonemize_with("ㄱㅏㆆ"), "f0 m0 ㆆ");
}

/// 母音の直前の子音は、終声表に含まれていても初声になる
#[test]
fn test_lookahead_rule() {
    for &c in &crate::symbol::INITIALS {
        let graphemes: String = [c, 'ㅣ'].iter().collect();
        let out = phonemize_with(&graphemes);
        assert!(out.starts_with('f'), "{graphemes} -> {out}");
    }
}

/// 末尾の子音には先読み規則が適用されない
#[test]
fn test_terminal_rule() {
    for &c in &crate::symbol::FINALS {
        let graphemes: String = ['ㅏ', c].iter().collect();
        let out = phonemize_with(&graphemes);
        let index = crate::symbol::lookup(c, SymbolClass::Final).unwrap();
        assert!(out.ends_with(&format!(" e{index}")), "{graphemes} -> {out}");
    }
}

/// 同じ入力に対して常に同じ結果を返す
#[test]
fn test_deterministic() {
    let phonemizer = Phonemizer::new();
    let mut w1 = phonemizer.new_worker();
    let mut w2 = phonemizer.clone().new_worker();
    for word in ["안녕하세요", "뛰어가다", "A형", ""] {
        w1.reset_word(word);
        w1.phonemize();
        w2.reset_word(word);
        w2.phonemize();
        assert_eq!(w1.symbols_to_string(), w2.symbols_to_string());
    }
}

#[test]
fn test_shared_decomposer() {
    let decomposer = std::sync::Arc::new(HangulDecomposer::new().latin_filter(false));
    let p1 = Phonemizer::from_shared_decomposer(decomposer.clone());
    let p2 = Phonemizer::from_shared_decomposer(decomposer);
    let mut w1 = p1.new_worker();
    let mut w2 = p2.new_worker();
    w1.reset_word("漢가");
    w1.phonemize();
    w2.reset_word("漢가");
    w2.phonemize();
    assert_eq!(w1.symbols_to_string(), "漢 f0 m0");
    assert_eq!(w1.symbols_to_string(), w2.symbols_to_string());
}

#[test]
fn test_symbol_access() {
    let mut worker = Phonemizer::new().new_worker();
    worker.reset_word("값");
    worker.phonemize();
    let symbols: Vec<Symbol> = worker.symbol_iter().collect();
    assert_eq!(
        symbols,
        vec![
            Symbol::new(SymbolClass::Initial, 0).unwrap(),
            Symbol::new(SymbolClass::Vowel, 0).unwrap(),
            Symbol::new(SymbolClass::Final, 17).unwrap(),
        ]
    );
    assert_eq!(worker.graphemes(), &['ㄱ', 'ㅏ', 'ㅄ']);
    assert_eq!(worker.word(), "값");
}
