// debug 构建输出到 tracing，release 构建整段抹掉
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! dev_info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! dev_info {
    ($($arg:tt)*) => {{}};
}
