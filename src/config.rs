use serde::Deserialize;

const TEXT_BASE: u32 = 0x0040_0000;
const TEXT_SIZE: u32 = 0x0010_0000;
const DATA_BASE: u32 = 0x1001_0000;
const DATA_SIZE: u32 = 0x0001_0000;
const STACK_TOP: u32 = 0x7FFF_FFF0;
const STACK_SIZE: u32 = 0x0001_0000;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_instructions: bool,

    #[serde(default = "default_forwarding")]
    pub forwarding: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            forwarding: default_forwarding(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_text_base")]
    pub text_base: String,

    #[serde(default = "default_text_size")]
    pub text_size: String,

    #[serde(default = "default_data_base")]
    pub data_base: String,

    #[serde(default = "default_data_size")]
    pub data_size: String,

    #[serde(default = "default_stack_top")]
    pub stack_top: String,

    #[serde(default = "default_stack_size")]
    pub stack_size: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            text_base: default_text_base(),
            text_size: default_text_size(),
            data_base: default_data_base(),
            data_size: default_data_size(),
            stack_top: default_stack_top(),
            stack_size: default_stack_size(),
        }
    }
}

impl MemoryConfig {
    pub fn text_base_val(&self) -> u32 {
        parse_hex(&self.text_base, TEXT_BASE)
    }

    pub fn text_size_val(&self) -> u32 {
        parse_hex(&self.text_size, TEXT_SIZE)
    }

    pub fn data_base_val(&self) -> u32 {
        parse_hex(&self.data_base, DATA_BASE)
    }

    pub fn data_size_val(&self) -> u32 {
        parse_hex(&self.data_size, DATA_SIZE)
    }

    pub fn stack_top_val(&self) -> u32 {
        parse_hex(&self.stack_top, STACK_TOP)
    }

    pub fn stack_size_val(&self) -> u32 {
        parse_hex(&self.stack_size, STACK_SIZE)
    }
}

fn parse_hex(s: &str, default: u32) -> u32 {
    let s = s.trim_start_matches("0x");
    u32::from_str_radix(s, 16).unwrap_or(default)
}

fn default_forwarding() -> bool {
    true
}

fn default_text_base() -> String {
    format!("{:#x}", TEXT_BASE)
}

fn default_text_size() -> String {
    format!("{:#x}", TEXT_SIZE)
}

fn default_data_base() -> String {
    format!("{:#x}", DATA_BASE)
}

fn default_data_size() -> String {
    format!("{:#x}", DATA_SIZE)
}

fn default_stack_top() -> String {
    format!("{:#x}", STACK_TOP)
}

fn default_stack_size() -> String {
    format!("{:#x}", STACK_SIZE)
}
