use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use lex_dictconv::convert::id_map;
use lex_dictconv::settings::parse_settings_toml;
use lex_dictconv::{ConvertStats, Converter, Profile, Settings};
use tracing::info_span;

use crate::dict_source::{self, DictSourceError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub struct ConvertOptions<'a> {
    /// Directory holding the Sudachi lexicon files.
    pub sudachi_dir: &'a str,
    /// Directory holding the existing Mozc dictionary files. Defaults to `sudachi_dir`.
    pub mozc_dir: Option<&'a str>,
    pub settings: Option<&'a str>,
    pub profile: Option<Profile>,
    /// Diagnostics file. Stderr when absent.
    pub diagnostics: Option<&'a str>,
}

pub fn convert_cmd(opts: &ConvertOptions<'_>) {
    let mut settings = match opts.settings {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_settings_toml(&content), "Error: {}")
        }
        None => Settings::default(),
    };
    if let Some(profile) = opts.profile {
        settings.profile = profile;
    }

    let sudachi_dir = Path::new(opts.sudachi_dir);
    let mozc_dir = opts.mozc_dir.map_or(sudachi_dir, Path::new);
    let mut out = BufWriter::new(io::stdout().lock());

    let stats = match opts.diagnostics {
        Some(path) => {
            let file = die!(File::create(path), "Error creating {path}: {}");
            let mut diagnostics = BufWriter::new(file);
            die!(
                run_convert(sudachi_dir, mozc_dir, &settings, &mut out, &mut diagnostics),
                "Error: {}"
            )
        }
        None => {
            let mut diagnostics = io::stderr().lock();
            die!(
                run_convert(sudachi_dir, mozc_dir, &settings, &mut out, &mut diagnostics),
                "Error: {}"
            )
        }
    };

    eprintln!(
        "Wrote {} entries from {} rows ({} filtered, {} duplicates, {} errors)",
        stats.emitted,
        stats.rows,
        stats.filtered,
        stats.duplicate_in_run + stats.duplicate_in_existing,
        stats.errors()
    );
}

/// Index the existing Mozc files under `mozc_dir`, then convert every
/// configured lexicon under `sudachi_dir` in order.
///
/// Every source file is checked before indexing starts.
pub fn run_convert<W: Write, D: Write>(
    sudachi_dir: &Path,
    mozc_dir: &Path,
    settings: &Settings,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<ConvertStats, DictSourceError> {
    let _span = info_span!("convert", profile = %settings.profile).entered();

    let sources = dict_source::source_files(sudachi_dir, &settings.input)?;
    let existing = dict_source::existing_files(mozc_dir, &settings.input)?;
    let index = dict_source::load_existing_index(&existing)?;

    let mut converter = Converter::new(&index, settings.profile, settings.cost);
    for path in &sources {
        eprintln!("Reading {}...", path.display());
        let file = File::open(path)?;
        let stats = converter
            .convert_reader(BufReader::new(file), out, diagnostics)
            .map_err(|source| DictSourceError::Read {
                path: path.clone(),
                source,
            })?;
        eprintln!(
            "  ({} entries, skipped {} of {} rows)",
            stats.emitted,
            stats.rows - stats.emitted,
            stats.rows
        );
    }
    out.flush()?;
    diagnostics.flush()?;

    converter.log_summary();
    Ok(*converter.stats())
}

pub fn id_map_cmd(id: Option<i32>) {
    match id {
        Some(id) => match id_map::lookup(id) {
            Some(mapped) => println!("{id}\t{mapped}"),
            None => {
                eprintln!("Sudachi ID {id} is not in the map");
                process::exit(1);
            }
        },
        None => {
            for (sudachi_id, mapped) in id_map::entries() {
                println!("{sudachi_id}\t{mapped}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE: &str = "\
とても,4,4,100,とても,副詞,*,*,*,*,*,トテモ,とても,*,A,*,*,*
漢字,5146,5146,5100,漢字,名詞,普通名詞,一般,*,*,*,カンジ,漢字,*,A,*,*,*
東京,4792,4792,3000,東京,名詞,固有名詞,地名,一般,*,*,トウキョウ,東京,*,A,*,*,*
謎,999,999,3000,謎,名詞,普通名詞,一般,*,*,*,ナゾ,謎,*,A,*,*,*
";
    const NOTCORE: &str = "\
とても,4,4,200,とても,副詞,*,*,*,*,*,トテモ,とても,*,A,*,*,*
感じ,5146,5146,5150,感じ,名詞,普通名詞,一般,*,*,*,カンジ,感じ,*,A,*,*,*
";

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn sudachi_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("core_lex.csv"), CORE).unwrap();
        fs::write(dir.path().join("notcore_lex.csv"), NOTCORE).unwrap();
        dir
    }

    #[test]
    fn converts_all_sources_against_existing() {
        let sudachi = sudachi_dir();
        let mozc = tempfile::tempdir().unwrap();
        fs::write(
            mozc.path().join("dictionary00.txt"),
            "かんじ\t1847\t1847\t4000\t感じ\n",
        )
        .unwrap();

        let mut out = Vec::new();
        let mut diag = Vec::new();
        let stats = run_convert(
            sudachi.path(),
            mozc.path(),
            &Settings::default(),
            &mut out,
            &mut diag,
        )
        .unwrap();

        assert_eq!(
            lines(out),
            vec!["とても\t12\t12\t6010\tとても", "かんじ\t1847\t1847\t6510\t漢字"]
        );
        assert_eq!(lines(diag), vec!["cannot convert left-id:999 ナゾ 謎"]);
        assert_eq!(stats.rows, 6);
        assert_eq!(stats.emitted, 2);
        assert_eq!(stats.duplicate_in_run, 1);
        assert_eq!(stats.duplicate_in_existing, 1);
        assert_eq!(stats.filtered, 1);
        assert_eq!(stats.unmapped_id, 1);
    }

    #[test]
    fn rerun_over_own_output_emits_nothing() {
        let sudachi = sudachi_dir();
        let mozc = tempfile::tempdir().unwrap();
        let settings = Settings::default();

        let mut first = Vec::new();
        run_convert(sudachi.path(), mozc.path(), &settings, &mut first, &mut io::sink()).unwrap();
        fs::write(mozc.path().join("dictionary_sudachi.txt"), &first).unwrap();

        let mut second = Vec::new();
        let stats =
            run_convert(sudachi.path(), mozc.path(), &settings, &mut second, &mut io::sink())
                .unwrap();
        assert!(second.is_empty());
        assert_eq!(stats.emitted, 0);
    }

    #[test]
    fn missing_source_fails_before_output() {
        let sudachi = tempfile::tempdir().unwrap();
        fs::write(sudachi.path().join("core_lex.csv"), CORE).unwrap();

        let mut out = Vec::new();
        let err = run_convert(
            sudachi.path(),
            sudachi.path(),
            &Settings::default(),
            &mut out,
            &mut io::sink(),
        )
        .unwrap_err();
        assert!(matches!(err, DictSourceError::MissingSource(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn custom_source_list() {
        let sudachi = sudachi_dir();
        let mut settings = Settings::default();
        settings.input.source_files = vec!["notcore_lex.csv".to_string()];

        let mut out = Vec::new();
        let stats =
            run_convert(sudachi.path(), sudachi.path(), &settings, &mut out, &mut io::sink())
                .unwrap();
        assert_eq!(stats.rows, 2);
        assert_eq!(lines(out).len(), 2);
    }
}
