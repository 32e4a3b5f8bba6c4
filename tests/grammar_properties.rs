//! Structural properties of generated strings: brace balance, comma
//! placement, nesting depth and symbol set, across a range of seeds and
//! parameter sets.

use edsgen::{assemble, Alphabet, AverageSettings, GeneratorConfig, SegmentGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Walks an EDS string and returns the deepest brace nesting level.
///
/// Panics with a description of the first grammar violation found. A group
/// must hold at least one variant, but variants may be empty: `{,}` is two
/// empty alternatives and is accepted, only `{}` is rejected.
fn check_grammar(eds: &str, alphabet: Alphabet) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut previous = None;

    for (pos, c) in eds.chars().enumerate() {
        match c {
            '{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            '}' => {
                assert!(depth > 0, "unbalanced '}}' at {} in {}", pos, eds);
                assert_ne!(previous, Some('{'), "empty group at {} in {}", pos, eds);
                depth -= 1;
            }
            ',' => assert!(depth > 0, "comma outside braces at {} in {}", pos, eds),
            _ => assert!(alphabet.contains(c), "unexpected symbol '{}' at {}", c, pos),
        }
        previous = Some(c);
    }

    assert_eq!(depth, 0, "unclosed brace in {}", eds);
    deepest
}

fn busy_config(max_depth: usize) -> GeneratorConfig {
    GeneratorConfig {
        alphabet: Alphabet::Dna,
        probability: 0.3,
        averages: AverageSettings {
            length_mean: 12.0,
            length_deviation: 3.0,
            count_mean: 3.0,
            count_deviation: 1.0,
        },
        recursion_probability: 0.35,
        max_depth,
        length: 400,
    }
}

#[test]
fn test_grammar_and_depth_bound() {
    for max_depth in 0..5 {
        let config = busy_config(max_depth);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let assembly = assemble(&config, &mut rng).expect("valid config");
            let deepest = check_grammar(&assembly.eds, config.alphabet);
            assert!(
                deepest <= max_depth + 1,
                "nesting {} exceeds bound for max depth {}",
                deepest,
                max_depth
            );
            assert!(assembly.stats.deepest_depth <= max_depth);
        }
    }
}

#[test]
fn test_empty_alternatives_are_grammatical() {
    assert_eq!(check_grammar("A{,}C{G,{,}T}", Alphabet::Dna), 2);
}

#[test]
#[should_panic(expected = "empty group")]
fn test_empty_group_is_rejected() {
    check_grammar("AC{}G", Alphabet::Dna);
}

#[test]
fn test_default_output_accepts_all_empty_groups() {
    // zero-length samples at the default settings produce groups like `{,}`;
    // they still parse, and never collapse into `{}`
    let config = GeneratorConfig::default();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let assembly = assemble(&config, &mut rng).unwrap();
        check_grammar(&assembly.eds, config.alphabet);
        assert!(!assembly.eds.contains("{}"));
    }
}

#[test]
fn test_depth_zero_has_no_nested_groups() {
    let config = busy_config(0);
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let assembly = assemble(&config, &mut rng).unwrap();
        assert!(check_grammar(&assembly.eds, config.alphabet) <= 1);
        assert_eq!(assembly.stats.nested_segments, 0);
    }
}

#[test]
fn test_protein_alphabet_defaults() {
    let config = GeneratorConfig { alphabet: Alphabet::Protein, ..Default::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let assembly = assemble(&config, &mut rng).unwrap();
    check_grammar(&assembly.eds, Alphabet::Protein);
    assert!(assembly.stats.accounted_length >= config.length);
}

#[test]
fn test_probability_zero_is_exact_literal() {
    let config = GeneratorConfig { probability: 0.0, length: 1234, ..busy_config(5) };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let assembly = assemble(&config, &mut rng).unwrap();
    assert_eq!(assembly.eds.chars().count(), 1234);
    assert_eq!(check_grammar(&assembly.eds, config.alphabet), 0);
}

#[test]
fn test_determinism_and_seed_sensitivity() {
    let config = busy_config(3);
    let a = assemble(&config, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
    let b = assemble(&config, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
    let c = assemble(&config, &mut ChaCha8Rng::seed_from_u64(78)).unwrap();
    assert_eq!(a.eds, b.eds);
    assert_eq!(a.stats, b.stats);
    assert_ne!(a.eds, c.eds);
}

#[test]
fn test_generated_segments_are_never_empty() {
    let settings = AverageSettings {
        length_mean: 5.0,
        length_deviation: 2.0,
        count_mean: 1.0,
        count_deviation: 2.0,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut generator = SegmentGenerator::new(&mut rng, Alphabet::Dna, 0.3, 3);
    for _ in 0..500 {
        let segment = generator.generate(0, settings, None);
        assert!(segment.variant_count() >= 1);
        for variant in segment.variants() {
            check_grammar(variant, Alphabet::Dna);
        }
    }
}

#[test]
fn test_child_cap_clamps_literal() {
    let settings = AverageSettings {
        length_mean: 9.0,
        length_deviation: 0.0,
        count_mean: 1.0,
        count_deviation: 0.0,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut generator = SegmentGenerator::new(&mut rng, Alphabet::Dna, 0.0, 1);
    let segment = generator.generate(1, settings, Some(5));
    assert!(segment.is_singleton());
    assert_eq!(segment.first().len(), 5);
}
