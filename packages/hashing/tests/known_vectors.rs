//! Regression vectors pinned per word width

use strhash_hashing::{
    ap_hash, bkdr_hash, bp_hash, dek_hash, djb_hash, elf_hash, fnv_hash, js_hash, pjw_hash,
    rs_hash, sdb_hash, Hash, HashAlgorithm, Word, WORD_BITS,
};

const KEY: &[u8] = b"abcdefghijklmnopqrstuvwxyz1234567890";

#[cfg(not(feature = "word32"))]
const EXPECTED: [(HashAlgorithm, Word); 11] = [
    (HashAlgorithm::Rs, 6_985_544_498_910_593_518),
    (HashAlgorithm::Js, 16_111_957_030_899_954_014),
    (HashAlgorithm::Pjw, 14_729_453_271_908_912),
    (HashAlgorithm::Elf, 126_631_744),
    (HashAlgorithm::Bkdr, 15_106_123_814_023_981_496),
    (HashAlgorithm::Sdbm, 11_541_016_163_653_535_752),
    (HashAlgorithm::Djb, 17_447_427_071_536_486_321),
    (HashAlgorithm::Dek, 16_460_515_672_069_602_157),
    (HashAlgorithm::Bp, 12_855_192_720_472_153_264),
    (HashAlgorithm::Fnv, 15_488_109_164_513_571_906),
    (HashAlgorithm::Ap, 6_959_572_895_909_084_617),
];

#[cfg(feature = "word32")]
const EXPECTED: [(HashAlgorithm, Word); 11] = [
    (HashAlgorithm::Rs, 4_097_835_502),
    (HashAlgorithm::Js, 1_651_003_062),
    (HashAlgorithm::Pjw, 126_631_744),
    (HashAlgorithm::Elf, 126_631_744),
    (HashAlgorithm::Bkdr, 3_153_586_616),
    (HashAlgorithm::Sdbm, 3_449_571_336),
    (HashAlgorithm::Djb, 729_241_521),
    (HashAlgorithm::Dek, 2_923_964_919),
    (HashAlgorithm::Bp, 1_726_880_944),
    (HashAlgorithm::Fnv, 3_243_095_106),
    (HashAlgorithm::Ap, 882_643_939),
];

#[test]
fn word_width_is_pinned() {
    #[cfg(not(feature = "word32"))]
    assert_eq!(WORD_BITS, 64);
    #[cfg(feature = "word32")]
    assert_eq!(WORD_BITS, 32);
}

#[test]
fn free_functions_reproduce_reference_values() {
    let [rs, js, pjw, elf, bkdr, sdb, djb, dek, bp, fnv, ap] = EXPECTED.map(|(_, v)| v);
    assert_eq!(rs_hash(KEY), rs, "RSHash");
    assert_eq!(js_hash(KEY), js, "JSHash");
    assert_eq!(pjw_hash(KEY), pjw, "PJWHash");
    assert_eq!(elf_hash(KEY), elf, "ELFHash");
    assert_eq!(bkdr_hash(KEY), bkdr, "BKDRHash");
    assert_eq!(sdb_hash(KEY), sdb, "SDBHash");
    assert_eq!(djb_hash(KEY), djb, "DJBHash");
    assert_eq!(dek_hash(KEY), dek, "DEKHash");
    assert_eq!(bp_hash(KEY), bp, "BPHash");
    assert_eq!(fnv_hash(KEY), fnv, "FNVHash");
    assert_eq!(ap_hash(KEY), ap, "APHash");
}

#[test]
fn fluent_api_reproduces_reference_values() {
    let all = Hash::all(KEY);
    assert_eq!(all.len(), EXPECTED.len());
    for (hash, (algorithm, expected)) in all.iter().zip(EXPECTED) {
        assert_eq!(hash.algorithm(), algorithm);
        assert_eq!(hash.value(), expected, "{algorithm}");
        assert_eq!(Hash::algorithm(algorithm).compute(KEY), *hash);
    }
}

#[test]
fn empty_input_returns_initial_state() {
    let expected: [(HashAlgorithm, Word); 11] = [
        (HashAlgorithm::Rs, 0),
        (HashAlgorithm::Js, 1_315_423_911),
        (HashAlgorithm::Pjw, 0),
        (HashAlgorithm::Elf, 0),
        (HashAlgorithm::Bkdr, 0),
        (HashAlgorithm::Sdbm, 0),
        (HashAlgorithm::Djb, 5381),
        (HashAlgorithm::Dek, 0),
        (HashAlgorithm::Bp, 0),
        (HashAlgorithm::Fnv, 0),
        (HashAlgorithm::Ap, 0xAAAA_AAAA),
    ];
    for (algorithm, value) in expected {
        assert_eq!(algorithm.hash(b""), value, "{algorithm}");
    }
}

#[test]
fn short_key_vectors() {
    #[cfg(not(feature = "word32"))]
    let expected: [Word; 11] = [
        5_429_002_458_264_113_364,
        17_157_779_952_303_772_422,
        31_279_040_100_696_164,
        18_131_988,
        17_848_854_111_673_996_868,
        3_262_740_067_968_255_172,
        13_876_786_532_495_509_697,
        300_843_404_586_519_039,
        17_066_880_102_773_339_748,
        8_983_871_053_162_921_952,
        2_112_077_512_206_665_012,
    ];
    #[cfg(feature = "word32")]
    let expected: [Word; 11] = [
        3_247_313_108,
        3_161_187_078,
        18_131_988,
        18_131_988,
        1_310_283_332,
        430_867_652,
        894_552_257,
        2_204_797_599,
        2_113_713_764,
        3_484_467_168,
        2_669_898_470,
    ];
    for (algorithm, value) in HashAlgorithm::ALL.into_iter().zip(expected) {
        assert_eq!(algorithm.hash(b"hello world"), value, "{algorithm}");
    }
}

#[test]
fn pjw_depends_on_word_width() {
    #[cfg(not(feature = "word32"))]
    assert_ne!(pjw_hash(KEY), elf_hash(KEY));
    #[cfg(feature = "word32")]
    assert_eq!(pjw_hash(KEY), elf_hash(KEY));
}
