use std::io;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lex_dictconv::settings::CostSettings;
use lex_dictconv::{Converter, ExistingIndex, Profile};

const ROWS: &[&str] = &[
    "とても,4,4,100,とても,副詞,*,*,*,*,*,トテモ,とても,*,A,*,*,*",
    "漢字,5146,5146,5100,漢字,名詞,普通名詞,一般,*,*,*,カンジ,漢字,*,A,*,*,*",
    "感じ,5146,5146,5150,感じ,名詞,普通名詞,一般,*,*,*,カンジ,感じ,*,A,*,*,*",
    "山田,4790,4790,4000,山田,名詞,固有名詞,人名,姓,*,*,ヤマダ,山田,*,A,*,*,*",
    "東京,4792,4792,3000,東京,名詞,固有名詞,地名,一般,*,*,トウキョウ,東京,*,A,*,*,*",
    "食べる,1286,1286,3000,食べる,動詞,一般,*,*,下一段-バ行,終止形-一般,タベル,食べる,*,A,*,*,*",
    "山田太郎,4787,4787,3000,山田太郎,名詞,固有名詞,人名,一般,*,*,ヤマダタロウ,*,*,C,*,*,*",
    "test,5146,5146,3000,test,名詞,普通名詞,一般,*,*,*,テスト,test,*,A,*,*,*",
];

/// A lexicon of `n` rows, cycling through `ROWS` with unique surfaces.
fn lexicon(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        let row = ROWS[i % ROWS.len()];
        let (head, tail) = row.split_once(',').unwrap_or((row, ""));
        let fields: Vec<&str> = tail.splitn(4, ',').collect();
        // Suffix the display headword so rows do not collapse in dedup.
        out.push_str(&format!(
            "{head},{},{},{},{}{i},{}\n",
            fields[0],
            fields[1],
            fields[2],
            head,
            fields[3].split_once(',').map_or("", |(_, rest)| rest)
        ));
    }
    out
}

fn existing_index() -> ExistingIndex {
    let mut index = ExistingIndex::new();
    for i in 0..1000 {
        index.insert_line(&format!("かんじ\t1847\t1847\t5000\t漢字{i}"));
    }
    index
}

fn bench_convert(c: &mut Criterion) {
    let index = existing_index();
    let mut group = c.benchmark_group("convert/reader");
    for &n in &[1_000usize, 10_000] {
        let input = lexicon(n);
        for profile in [Profile::Strict, Profile::Relaxed] {
            group.bench_with_input(BenchmarkId::new(profile.as_str(), n), &input, |b, input| {
                b.iter(|| {
                    let mut converter = Converter::new(&index, profile, CostSettings::default());
                    converter
                        .convert_reader(input.as_bytes(), &mut io::sink(), &mut io::sink())
                        .map(|stats| stats.emitted)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
