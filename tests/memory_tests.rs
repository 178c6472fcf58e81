//! Tests for the region-backed address space.

use mipsim::config::Config;
use mipsim::mem::Memory;

fn memory() -> Memory {
    Memory::new(&Config::default().memory)
}

/// Tests the word round trip in every region.
#[test]
fn test_round_trip_all_regions() {
    let mut mem = memory();
    for addr in [0x0040_0000u32, 0x1001_0000, 0x7FFF_FF00] {
        mem.write_u32(addr, 0xDEAD_BEEF);
        assert_eq!(mem.read_u32(addr), 0xDEAD_BEEF, "addr {:#010x}", addr);
    }
}

/// Tests that words are stored little-endian by reading at a byte offset.
#[test]
fn test_little_endian_layout() {
    let mut mem = memory();
    mem.write_u32(0x1001_0000, 0x1122_3344);
    assert_eq!(mem.read_u32(0x1001_0001), 0x0011_2233);
}

/// Tests that unmapped reads return zero.
#[test]
fn test_unmapped_read_is_zero() {
    let mem = memory();
    assert_eq!(mem.read_u32(0x0000_0000), 0);
    assert_eq!(mem.read_u32(0x2000_0000), 0);
}

/// Tests that unmapped writes are dropped without effect.
#[test]
fn test_unmapped_write_dropped() {
    let mut mem = memory();
    mem.write_u32(0x2000_0000, 0x1234_5678);
    assert_eq!(mem.read_u32(0x2000_0000), 0);
}

/// Tests that a word overhanging the end of a region reads as zero and is
/// not writable.
#[test]
fn test_region_end_overhang() {
    let mut mem = memory();
    // Data region ends at 0x1001FFFF; the last full word starts at ...FFFC.
    mem.write_u32(0x1001_FFFC, 0xAABB_CCDD);
    assert_eq!(mem.read_u32(0x1001_FFFC), 0xAABB_CCDD);

    mem.write_u32(0x1001_FFFE, 0x1111_1111);
    assert_eq!(mem.read_u32(0x1001_FFFE), 0);
}

/// Tests that clear rezeros every region.
#[test]
fn test_clear() {
    let mut mem = memory();
    mem.write_u32(0x0040_0000, 1);
    mem.write_u32(0x1001_0000, 2);
    mem.clear();
    assert_eq!(mem.read_u32(0x0040_0000), 0);
    assert_eq!(mem.read_u32(0x1001_0000), 0);
}

/// Tests the region table the configuration defaults describe.
#[test]
fn test_default_layout() {
    let mem = memory();
    let names: Vec<&str> = mem.regions().iter().map(|r| r.name).collect();
    assert_eq!(names, ["text", "data", "stack"]);

    let text = &mem.regions()[0];
    assert_eq!(text.begin, 0x0040_0000);
    let stack = &mem.regions()[2];
    assert_eq!(stack.end, 0x7FFF_FFF0);
}
