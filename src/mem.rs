//! Simulated address space.
//!
//! Memory is a small table of disjoint regions (text, data, stack), each an
//! inclusive `[begin, end]` range backed by a byte array. Words are
//! little-endian. Accesses that no region claims behave the way the wire
//! would: reads return 0, writes are dropped.

use crate::config::MemoryConfig;

/// One contiguous backed range of the address space.
pub struct MemRegion {
    pub name: &'static str,
    pub begin: u32,
    pub end: u32,
    data: Vec<u8>,
}

impl MemRegion {
    fn new(name: &'static str, begin: u32, end: u32) -> Self {
        let size = (end - begin) as usize + 1;
        Self {
            name,
            begin,
            end,
            data: vec![0; size],
        }
    }

    fn contains(&self, addr: u32) -> bool {
        addr >= self.begin && addr <= self.end
    }
}

/// The region table. Mutated only by the MEM stage and the loader.
pub struct Memory {
    regions: Vec<MemRegion>,
}

impl Memory {
    /// Builds the text/data/stack regions described by the configuration.
    pub fn new(layout: &MemoryConfig) -> Self {
        let text_base = layout.text_base_val();
        let data_base = layout.data_base_val();
        let stack_top = layout.stack_top_val();
        Self {
            regions: vec![
                MemRegion::new("text", text_base, text_base + layout.text_size_val() - 1),
                MemRegion::new("data", data_base, data_base + layout.data_size_val() - 1),
                MemRegion::new("stack", stack_top - layout.stack_size_val(), stack_top),
            ],
        }
    }

    pub fn regions(&self) -> &[MemRegion] {
        &self.regions
    }

    fn region(&self, addr: u32) -> Option<(&MemRegion, usize)> {
        self.regions
            .iter()
            .find(|r| r.contains(addr))
            .map(|r| (r, (addr - r.begin) as usize))
    }

    fn region_mut(&mut self, addr: u32) -> Option<(&mut MemRegion, usize)> {
        self.regions
            .iter_mut()
            .find(|r| r.contains(addr))
            .map(|r| {
                let offset = (addr - r.begin) as usize;
                (r, offset)
            })
    }

    /// Reads a little-endian word. Unmapped addresses read as 0, as does a
    /// word that would run past the end of its region.
    pub fn read_u32(&self, addr: u32) -> u32 {
        match self.region(addr) {
            Some((r, offset)) if offset + 4 <= r.data.len() => u32::from_le_bytes([
                r.data[offset],
                r.data[offset + 1],
                r.data[offset + 2],
                r.data[offset + 3],
            ]),
            _ => 0,
        }
    }

    /// Writes a little-endian word. Unmapped addresses drop the write.
    pub fn write_u32(&mut self, addr: u32, value: u32) {
        if let Some((r, offset)) = self.region_mut(addr) {
            if offset + 4 <= r.data.len() {
                r.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
            }
        }
    }

    /// Rezeros every region. Used by reset before the program is reloaded.
    pub fn clear(&mut self) {
        for r in &mut self.regions {
            r.data.fill(0);
        }
    }
}
