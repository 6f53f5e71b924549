use crate::address::AddressDecoder;

const ADDRESSES: [u32; 8] = [0, 1, 0x3f, 0x40, 0xdead_beef, 0x8000_0000, 0x7fff_fff0, u32::MAX];

#[test]
fn splits_offset_index_and_tag() {
    // 16 byte blocks, 64 sets
    let decoder = AddressDecoder::new(4, 6);
    assert_eq!(decoder.decode(0x1234_5678), (0x1234_5678 >> 10, (0x1234_5678 >> 4) & 0x3f));
    assert_eq!(decoder.tag_bits(), 22);
}

#[test]
fn no_offset_bits_for_unit_blocks() {
    let decoder = AddressDecoder::new(0, 2);
    assert_eq!(decoder.decode(0), (0, 0));
    assert_eq!(decoder.decode(4), (1, 0));
    assert_eq!(decoder.decode(8), (2, 0));
    assert_eq!(decoder.decode(7), (1, 3));
}

#[test]
fn single_set_has_no_index() {
    let decoder = AddressDecoder::new(3, 0);
    for address in ADDRESSES {
        assert_eq!(decoder.decode(address), (address >> 3, 0));
    }
}

#[test]
fn decoding_is_total_when_the_tag_is_empty() {
    let decoder = AddressDecoder::new(16, 16);
    assert_eq!(decoder.tag_bits(), 0);
    assert_eq!(decoder.decode(u32::MAX), (0, 0xffff));
}

#[test]
fn round_trips_through_the_block_address() {
    for (offset_bits, index_bits) in [(0, 0), (0, 2), (2, 0), (4, 6), (6, 10), (5, 27), (12, 20)] {
        let decoder = AddressDecoder::new(offset_bits, index_bits);
        for address in ADDRESSES {
            let (tag, index) = decoder.decode(address);
            let rebuilt = decoder.encode(tag, index);
            assert_eq!(decoder.decode(rebuilt), (tag, index), "offset {offset_bits}, index {index_bits}, address {address:#x}");
            // Only the offset bits may differ
            assert_eq!(rebuilt, address & !((1u64 << offset_bits) as u32).wrapping_sub(1));
        }
    }
}
