//! 単語リストから発音記号列を生成するユーティリティ
//!
//! このバイナリは、改行区切りの韓国語単語リストを読み込み、
//! 各単語を初声・中声・終声の記号列に変換してファイルに出力します。

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use jamophone::lexicon::{self, OutputMode};
use jamophone::{HangulDecomposer, Phonemizer};

use clap::Parser;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(
    name = "phonemize",
    version,
    about = "Decomposes Korean words into tagged phone symbols"
)]
struct Args {
    /// Word list, one word per line.
    #[clap(short = 'i', long, default_value = "words")]
    words_in: PathBuf,

    /// File to which the phone sequences are output.
    #[clap(short = 'o', long, default_value = "decomposed_phone.txt")]
    phones_out: PathBuf,

    /// Output mode. Choices are phones and lexicon.
    ///
    /// `lexicon` prefixes each line with the word and a tab.
    #[clap(short = 'O', long, default_value = "phones")]
    output_mode: OutputMode,

    /// File to which the list of all phone symbols is output.
    #[clap(long)]
    phone_set_out: Option<PathBuf>,

    /// Keeps characters outside Hangul and Latin-1 as literal symbols.
    #[clap(long)]
    no_latin_filter: bool,
}

/// メイン関数
///
/// 単語リストを読み込んで記号列に変換し、指定されたファイルに出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{args:?}");

    let decomposer = HangulDecomposer::new().latin_filter(!args.no_latin_filter);
    let phonemizer = Phonemizer::with_decomposer(decomposer);
    let mut worker = phonemizer.new_worker();

    eprintln!("Loading the word list...: {:?}", &args.words_in);
    let rdr = File::open(&args.words_in)?;
    let wtr = File::create(&args.phones_out)?;
    let stats = lexicon::phonemize_lines(rdr, wtr, &mut worker, args.output_mode)?;
    eprintln!(
        "Wrote {} lines to {:?} ({} symbols, {} unclassified)",
        stats.num_words, &args.phones_out, stats.num_symbols, stats.num_misses,
    );

    if let Some(phone_set_out) = args.phone_set_out {
        eprintln!("Writing the phone set...: {:?}", &phone_set_out);
        lexicon::write_phone_set(File::create(phone_set_out)?)?;
    }

    println!("generate lexicon finish");

    Ok(())
}
