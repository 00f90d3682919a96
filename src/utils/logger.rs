// 初始化日志（设置日志格式）
pub fn init_logger(verbose: bool) -> Result<(), fern::InitError> {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    fern::Dispatch
        ::new()
        .format(|out, message, record| {
            out.finish(
                format_args!(
                    "{} {:<5}{}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    message
                )
            )
        })
        .level(level)
        // reqwest/hyper 的调试日志太多
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
