use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// 初始化日志。默认只输出警告，`-v` 输出 info，`-vv` 及以上输出 debug。
/// 设置了 `RUST_LOG` 环境变量时以其为准。
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}
