use idmangler::block::{
    Block, BlockId, IdentificationData, NameData, PowderData, RerollData, ShinyData, StartData,
    TypeData,
};
use idmangler::item::{basic_item_blocks, Item};
use idmangler::string::{decode_string, encode_string};
use idmangler::types::{Element, ItemType, Powder, Stat};
use idmangler::{decode, decode_item, encode, encode_item, DecodeError, EncodeError, Error, FormatVersion};
use proptest::prelude::*;

/// A real item string produced by the reference encoder (version byte 0).
const AFTERSHOCK: &str = "\u{F0000}\u{F0100}\u{F0241}\u{F6674}\u{F6572}\u{F7368}\u{F6F63}\
\u{F6B00}\u{F0305}\u{F0038}\u{F5D09}\u{F6C48}\u{F530A}\u{F5303}\u{F7C04}\u{F0404}\u{F318C}\
\u{F6005}\u{F02FF}";

#[test]
fn test_end_to_end_basic_item() {
    let blocks = vec![
        Block::Start(StartData::new(FormatVersion::V1)),
        Block::Type(TypeData::new(ItemType::Gear)),
        Block::Name(NameData::new("Test")),
        Block::End,
    ];
    let encoded = encode(&blocks, FormatVersion::V1).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded, blocks);
    match &decoded[0] {
        Block::Start(s) => assert_eq!(s.version, FormatVersion::V1),
        other => panic!("first block was {:?}", other),
    }
}

#[test]
fn test_encode_adds_missing_start_and_end() {
    let encoded = encode(&[Block::Name(NameData::new("Bare"))], FormatVersion::V1).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.first(), Some(&Block::Start(StartData::new(FormatVersion::V1))));
    assert_eq!(decoded.last(), Some(&Block::End));
    assert_eq!(decoded.len(), 3);
}

#[test]
fn test_reference_string_decodes() {
    let item = decode_item(AFTERSHOCK).unwrap();
    assert_eq!(item.name, "Aftershock");
    assert_eq!(item.item_type, ItemType::Gear);
    assert!(!item.extended_encoding);
    assert_eq!(
        item.identifications,
        vec![
            Stat::rolled(56, None, 93),
            Stat::rolled(9, None, 108),
            Stat::rolled(72, None, 83),
            Stat::rolled(10, None, 83),
            Stat::rolled(3, None, 124),
        ]
    );
    assert_eq!(item.powder_slots, 4);
    assert_eq!(item.powders, vec![Powder::new(Element::Earth, 6).unwrap(); 4]);
    assert_eq!(item.rerolls, Some(2));
    assert!(item.shiny.is_empty());
}

#[test]
fn test_reference_string_reencodes_bit_for_bit() {
    // The reference string carries version byte 0; re-encoding writes 1.
    let reencoded = encode_item(&decode_item(AFTERSHOCK).unwrap()).unwrap();
    let expected: String = std::iter::once('\u{F0001}')
        .chain(AFTERSHOCK.chars().skip(1))
        .collect();
    assert_eq!(reencoded, expected);
}

#[test]
fn test_identification_extended_roundtrip() {
    let stats = vec![
        Stat::pre_identified(20, 5),
        Stat::pre_identified(21, -300),
        Stat::rolled(1, Some(10), 100),
        Stat::rolled(2, Some(-45), 55),
        Stat::rolled(3, Some(70_000), 130),
    ];
    let blocks = vec![
        Block::Start(StartData::new(FormatVersion::V1)),
        Block::Identification(IdentificationData::new(stats.clone(), true)),
        Block::End,
    ];
    let decoded = decode(&encode(&blocks, FormatVersion::V1).unwrap()).unwrap();
    assert_eq!(decoded, blocks);

    let compact = vec![
        Block::Start(StartData::new(FormatVersion::V1)),
        Block::Identification(IdentificationData::new(stats, false)),
        Block::End,
    ];
    let decoded = decode(&encode(&compact, FormatVersion::V1).unwrap()).unwrap();
    let Block::Identification(ids) = &decoded[1] else {
        panic!("expected identification block, got {:?}", decoded[1]);
    };
    assert_eq!(ids.identifications.len(), 3);
    assert_eq!(ids.identifications.iter().filter(|s| s.is_pre_identified()).count(), 0);
    assert!(ids.identifications.iter().all(|s| s.base.is_none()));
}

#[test]
fn test_full_item_roundtrip() {
    let mut item = Item::new("Shiny Thing", ItemType::Gear);
    item.set_powder_slots(3);
    item.add_powder(Powder::new(Element::Thunder, 4).unwrap());
    item.add_powder(Powder::new(Element::Air, 6).unwrap());
    item.add_identification(Stat::pre_identified(7, 12));
    item.add_identification(Stat::rolled(8, Some(40), 77));
    item.extended_encoding = true;
    item.rerolls = Some(12);
    item.add_shiny_property(1, 4_000_000_000);
    item.add_shiny_property(2, -1);

    let decoded = decode_item(&encode_item(&item).unwrap()).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn test_two_start_blocks_fail() {
    let id = encode_string(&[0, 1, 0, 1, 255]);
    let err = decode(&id).unwrap_err();
    assert_eq!(err.decode_error(), Some(&DecodeError::StartReparse));
    assert!(matches!(err, Error::DecodeBlock { during: BlockId::Start, .. }));
}

#[test]
fn test_unknown_tag_fails() {
    let id = encode_string(&[0, 1, 200, 255]);
    assert_eq!(decode(&id).unwrap_err(), Error::Decode(DecodeError::UnknownBlock(200)));
}

#[test]
fn test_truncated_stream_reports_position() {
    let bytes = idmangler::ItemEncoder::new()
        .encode_bytes(&[
            Block::Type(TypeData::new(ItemType::Tome)),
            Block::Shiny(ShinyData::new(1, 1 << 40)),
        ])
        .unwrap();
    // drop the End tag and the final VarInt byte
    let cut = &bytes[..bytes.len() - 2];
    let err = idmangler::ItemDecoder::new().decode_bytes(cut).unwrap_err();
    assert_eq!(
        err,
        Error::DecodeBlock {
            during: BlockId::Shiny,
            source: DecodeError::UnexpectedEndOfBytes { offset: cut.len() },
        }
    );
}

#[test]
fn test_missing_start_block() {
    let id = encode_string(&[2, b'a', 0, 255]);
    assert_eq!(decode(&id).unwrap_err(), Error::Decode(DecodeError::NoStartBlockFound(2)));
    let id = encode_string(&[0, 9, 255]);
    assert_eq!(decode(&id).unwrap_err(), Error::Decode(DecodeError::UnknownVersion(9)));
}

#[test]
fn test_bad_codepoint() {
    assert_eq!(
        decode("hello").unwrap_err(),
        Error::Decode(DecodeError::BadCodepoint('h' as u32))
    );
}

#[test]
fn test_encode_errors_name_the_block() {
    let err = encode(&[Block::Name(NameData::new("Ünïcode"))], FormatVersion::V1).unwrap_err();
    assert_eq!(
        err,
        Error::Encode { during: BlockId::Name, source: EncodeError::NonAsciiString }
    );

    let many = vec![Powder::new(Element::Water, 2).unwrap(); 300];
    let err = encode(&[Block::Powder(PowderData::new(1, many))], FormatVersion::V1).unwrap_err();
    assert_eq!(err.encode_error(), Some(&EncodeError::TooManyPowders));
}

#[test]
fn test_overlong_shiny_value_fails() {
    let mut bytes = vec![0, 1, 6, 3];
    bytes.extend([0xFF; 9]);
    bytes.extend([0x7F, 255]);
    assert_eq!(
        decode(&encode_string(&bytes)).unwrap_err(),
        Error::DecodeBlock {
            during: BlockId::Shiny,
            source: DecodeError::VarIntOverflow { offset: 4 },
        }
    );
}

#[test]
fn test_trailing_bytes_after_end_are_ignored() {
    let id = encode_string(&[0, 1, 5, 3, 255, 1, 1]);
    assert_eq!(
        decode(&id).unwrap(),
        vec![
            Block::Start(StartData::new(FormatVersion::V1)),
            Block::Reroll(RerollData::new(3)),
            Block::End,
        ]
    );
}

#[test]
fn test_basic_item_blocks_encode() {
    let id = encode(&basic_item_blocks("Test", ItemType::Gear), FormatVersion::V1).unwrap();
    assert_eq!(decode_string(&id).unwrap(), b"\x00\x01\x01\x00\x02Test\x00\xFF");
}

fn arb_powder() -> impl Strategy<Value = Powder> {
    (0u8..5, 1u8..=6).prop_map(|(e, t)| Powder::new(Element::try_from(e).unwrap(), t).unwrap())
}

proptest! {
    #[test]
    fn prop_powders_roundtrip(slots in any::<u8>(), powders in proptest::collection::vec(arb_powder(), 0..=6)) {
        let blocks = vec![
            Block::Start(StartData::new(FormatVersion::V1)),
            Block::Powder(PowderData::new(slots, powders)),
            Block::End,
        ];
        let decoded = decode(&encode(&blocks, FormatVersion::V1).unwrap()).unwrap();
        prop_assert_eq!(decoded, blocks);
    }

    #[test]
    fn prop_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode(&encode_string(&bytes));
    }
}
