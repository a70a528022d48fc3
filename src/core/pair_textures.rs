use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use egui::{Context, TextureHandle};
use lru::LruCache;
use crate::core::image_loader::{ImageLoader, LoadResult};
use crate::core::session::PairRecord;

/// 缓存最近的 16 张图（当前组、预加载组和刚看过的几组）
const CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(16).unwrap();

pub enum TextureSlot {
    Ready(TextureHandle),
    Loading,
    Failed,
}

/// 标注界面用到的图片纹理
pub struct PairTextures {
    loader: ImageLoader,
    cache: LruCache<PathBuf, TextureHandle>,
    failed: HashSet<PathBuf>,
}

impl PairTextures {
    pub fn new() -> Self {
        Self {
            loader: ImageLoader::new(),
            cache: LruCache::new(CACHE_CAPACITY),
            failed: HashSet::new(),
        }
    }

    /// 每帧处理加载结果，返回是否收到了新数据
    pub fn process_load_results(&mut self) -> bool {
        let mut received_any = false;
        while let Ok(msg) = self.loader.rx.try_recv() {
            received_any = true;
            self.loader.finish(&msg.path);
            match msg.result {
                LoadResult::Ok(tex) => {
                    self.cache.put(msg.path, tex);
                }
                LoadResult::Err(_) => {
                    if msg.is_priority {
                        crate::dev_info!("current pair image failed: {}", msg.path.display());
                    }
                    self.failed.insert(msg.path);
                }
            }
        }
        received_any
    }

    pub fn is_busy(&self) -> bool {
        self.loader.has_pending()
    }

    pub fn slot(&mut self, path: &Path) -> TextureSlot {
        if let Some(tex) = self.cache.get(path) {
            TextureSlot::Ready(tex.clone())
        } else if self.failed.contains(path) {
            TextureSlot::Failed
        } else {
            TextureSlot::Loading
        }
    }

    fn request(&mut self, ctx: &Context, path: &str, is_priority: bool) {
        let path = PathBuf::from(path);
        if self.cache.contains(&path) || self.failed.contains(&path) || self.loader.is_loading(&path) {
            return;
        }
        self.loader.load_async(ctx.clone(), path, is_priority);
    }

    /// 加载当前这组，并预加载下一组
    pub fn request_pair(&mut self, ctx: &Context, current: &PairRecord, next: Option<&PairRecord>) {
        self.request(ctx, &current.path_a, true);
        self.request(ctx, &current.path_b, true);
        if let Some(next) = next {
            self.request(ctx, &next.path_a, false);
            self.request(ctx, &next.path_b, false);
        }
    }

    /// 换了列表之后清空
    pub fn clear(&mut self) {
        self.cache.clear();
        self.failed.clear();
    }
}
