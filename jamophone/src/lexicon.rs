//! 単語リストから発音辞書を生成するモジュール
//!
//! 改行区切りの単語リストをすべてメモリに読み込んだ後、1単語ずつ記号列に変換し、
//! 1行ずつ書き出します。出力行数は常に入力行数と一致し、順序も保たれます。

use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::str::FromStr;

use crate::decompose::Decompose;
use crate::errors::Result;
use crate::phonemizer::worker::Worker;
use crate::symbol::Symbol;

/// 出力モード
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// 記号列のみを出力します。
    #[default]
    Phones,
    /// 単語と記号列をタブで区切って出力します。
    Lexicon,
}

impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"phones"、"lexicon"のいずれか）
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "phones" => Ok(Self::Phones),
            "lexicon" => Ok(Self::Lexicon),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// 変換処理の統計情報
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexiconStats {
    /// 処理した単語（行）の数
    pub num_words: usize,
    /// 出力した記号の総数
    pub num_symbols: usize,
    /// 記号表に含まれず、そのまま出力された字母の数
    pub num_misses: usize,
}

/// 単語リストを読み込み、記号列を1行ずつ書き出します。
///
/// 入力は行単位で読み込まれ、行末の`\n`および`\r\n`は取り除かれます。
/// 空行は空の記号列（空行）として出力されます。
///
/// # 引数
///
/// * `rdr` - 単語リストのリーダー
/// * `wtr` - 出力先のライター
/// * `worker` - 変換に使用するワーカー
/// * `mode` - 出力モード
///
/// # 戻り値
///
/// 処理の統計情報
///
/// # エラー
///
/// 読み込みまたは書き込みに失敗した場合、[`JamophoneError`](crate::errors::JamophoneError)が返されます。
/// 入力がUTF-8として不正な場合も、I/Oエラーとして返されます。
///
/// # 例
///
/// ```
/// use jamophone::lexicon::{phonemize_lines, OutputMode};
/// use jamophone::Phonemizer;
///
/// let mut worker = Phonemizer::new().new_worker();
/// let mut out = vec![];
/// let stats = phonemize_lines("각\n\n안녕\n".as_bytes(), &mut out, &mut worker, OutputMode::Phones)?;
/// assert_eq!(String::from_utf8(out).unwrap(), "f0 m0 e0\n\nf11 m0 e3 f2 m6 e20\n");
/// assert_eq!(stats.num_words, 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn phonemize_lines<R, W, D>(
    rdr: R,
    wtr: W,
    worker: &mut Worker<D>,
    mode: OutputMode,
) -> Result<LexiconStats>
where
    R: Read,
    W: Write,
    D: Decompose,
{
    let words = BufReader::new(rdr)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?;
    log::info!("Loaded {} words", words.len());

    let misses_before = worker.num_misses();
    let mut stats = LexiconStats::default();
    let mut wtr = BufWriter::new(wtr);
    for word in &words {
        worker.reset_word(word);
        worker.phonemize();
        if mode == OutputMode::Lexicon {
            wtr.write_all(word.as_bytes())?;
            wtr.write_all(b"\t")?;
        }
        worker.write_symbols(&mut wtr)?;
        wtr.write_all(b"\n")?;
        stats.num_words += 1;
        stats.num_symbols += worker.num_symbols();
    }
    wtr.flush()?;

    stats.num_misses = worker.num_misses() - misses_before;
    if stats.num_misses != 0 {
        log::warn!(
            "{} grapheme(s) were not found in any symbol table and were written as-is",
            stats.num_misses
        );
    }
    log::info!(
        "Wrote {} lines with {} symbols",
        stats.num_words,
        stats.num_symbols
    );
    Ok(stats)
}

/// 記号の一覧を`記号<TAB>字母`の形式で書き出します。
///
/// 初声・中声・終声の順に、各記号表の順序で書き出します。
///
/// # 戻り値
///
/// 書き出した記号の数
///
/// # 例
///
/// ```
/// use jamophone::lexicon::write_phone_set;
///
/// let mut out = vec![];
/// let n = write_phone_set(&mut out)?;
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(n, 67);
/// assert_eq!(text.lines().next(), Some("f0\tㄱ"));
/// assert_eq!(text.lines().last(), Some("e26\tㅎ"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_phone_set<W>(wtr: W) -> Result<usize>
where
    W: Write,
{
    let mut wtr = BufWriter::new(wtr);
    let mut n = 0;
    for symbol in Symbol::inventory() {
        writeln!(&mut wtr, "{}\t{}", symbol, symbol.grapheme())?;
        n += 1;
    }
    wtr.flush()?;
    Ok(n)
}
