pub const DEFAULT_BASE_BLOCK_SIZE: u64 = 4096;

pub const DEFAULT_MULTIPLIERS: &str = "1,2,4,8,16,32,64,128,256,512,1024";

pub const DEFAULT_TOTAL_VOLUME: &str = "512 MiB";

pub const DEFAULT_SOURCE: &str = "/dev/zero";

pub const DEFAULT_SINK: &str = "/dev/null";

pub const DEFAULT_DD_PATH: &str = "dd";
