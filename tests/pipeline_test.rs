//! End-to-end tests for the lexicon -> forward index -> merge pipeline.

use std::collections::BTreeMap;
use std::path::Path;

use halberd::forward::builder::{ForwardIndexBuilder, ForwardIndexConfig, batch_path};
use halberd::forward::merge::{BatchMerger, MergeConfig};
use halberd::lexicon::Lexicon;
use halberd::lexicon::builder::{LexiconBuildConfig, LexiconBuilder};

fn write_paper(dir: &Path, name: &str, title: &str, body: &str) {
    let record = serde_json::json!({
        "metadata": {"title": title},
        "abstract": [{"text": body}],
    });
    std::fs::write(dir.join(name), record.to_string()).unwrap();
}

fn read_merged(path: &Path) -> serde_json::Map<String, serde_json::Value> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_full_pipeline() {
    let corpus = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();

    write_paper(corpus.path(), "3.json", "Viral transmission", "rapid spread dynamics");
    write_paper(corpus.path(), "1.json", "Vaccine efficacy", "immune response decline");
    write_paper(corpus.path(), "12.json", "Incubation periods", "rapid onset symptoms");

    // Stage 1: lexicon
    let (lexicon, scan) = LexiconBuilder::new(LexiconBuildConfig::new(corpus.path()))
        .build()
        .unwrap();
    assert_eq!(scan.files_processed, 3);

    let lexicon_path = work.path().join("lexicon.json");
    lexicon.save_json(&lexicon_path).unwrap();

    // Stage 2: batched forward index, forced into multiple batches
    let batch_dir = work.path().join("batches");
    let loaded = Lexicon::load(&lexicon_path).unwrap();
    let mut config = ForwardIndexConfig::new(corpus.path(), &batch_dir);
    config.batch_size = 2;
    let stats = ForwardIndexBuilder::new(config, loaded)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(stats.documents_indexed, 3);
    assert_eq!(stats.batches_written, 2);
    assert!(batch_path(&batch_dir, 1).exists());
    assert!(batch_path(&batch_dir, 2).exists());

    // Stage 3: merge
    let merged_path = work.path().join("forward_index.json");
    let merge_stats = BatchMerger::new(MergeConfig::new(&batch_dir, &merged_path))
        .merge()
        .unwrap();
    assert_eq!(merge_stats.batches_merged, 2);
    assert_eq!(merge_stats.documents, 3);

    let merged = read_merged(&merged_path);

    // Keys ascend numerically: 1, 3, 12 ("12" would sort before "3" as a string)
    let keys: Vec<_> = merged.keys().cloned().collect();
    assert_eq!(keys, vec!["1", "3", "12"]);

    // Soundness: every emitted word id exists in the lexicon
    let known_ids: Vec<u32> = lexicon.iter_by_id().map(|(_, id)| id).collect();
    for word_ids in merged.values() {
        for id in word_ids.as_array().unwrap() {
            let id = u32::try_from(id.as_u64().unwrap()).unwrap();
            assert!(known_ids.contains(&id), "unknown word id {id}");
        }
    }

    // Documents sharing a token share its id
    let id_of = |doc: &str| -> Vec<u64> {
        merged[doc]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect()
    };
    let rapid_id = lexicon.get("rapid").unwrap() as u64;
    assert!(id_of("3").contains(&rapid_id));
    assert!(id_of("12").contains(&rapid_id));
    assert!(!id_of("1").contains(&rapid_id));
}

#[test]
fn test_abstract_only_document_scenario() {
    // A document whose only text field is an abstract, resolved against a
    // lexicon that knows three of its words
    let corpus = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();

    let record = serde_json::json!({
        "abstract": [{"text": "The rapid spread of the virus"}],
    });
    std::fs::write(corpus.path().join("7.json"), record.to_string()).unwrap();

    let lexicon = Lexicon::from_pairs([
        ("rapid".to_string(), 4),
        ("spread".to_string(), 7),
        ("virus".to_string(), 9),
    ]);

    let config = ForwardIndexConfig::new(corpus.path(), work.path());
    ForwardIndexBuilder::new(config, lexicon)
        .unwrap()
        .build()
        .unwrap();

    let batch: BTreeMap<String, Vec<u32>> = serde_json::from_str(
        &std::fs::read_to_string(batch_path(work.path(), 1)).unwrap(),
    )
    .unwrap();
    assert_eq!(batch["7"], vec![4, 7, 9]);
}

#[test]
fn test_rebuild_produces_identical_lexicon_artifacts() {
    let corpus = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    write_paper(corpus.path(), "1.json", "Viral load", "antibody titers");

    let builder = LexiconBuilder::new(LexiconBuildConfig::new(corpus.path()));

    let (first, _) = builder.build().unwrap();
    let (second, _) = builder.build().unwrap();
    let path_a = work.path().join("a.txt");
    let path_b = work.path().join("b.txt");
    first.save_text(&path_a).unwrap();
    second.save_text(&path_b).unwrap();

    assert_eq!(std::fs::read(&path_a).unwrap(), std::fs::read(&path_b).unwrap());
}
