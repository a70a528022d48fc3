use egui::{ColorImage, Context, TextureHandle};
use image::ImageReader;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// 解码后的边长上限，超过的图片先缩小再上传纹理
const MAX_TEXTURE_SIDE: u32 = 4096;

pub enum LoadResult {
    Ok(TextureHandle),
    Err(String),
}

pub struct LoadMessage {
    pub path: PathBuf,
    pub result: LoadResult,
    pub is_priority: bool, // 当前正在看的这组
}

pub struct ImageLoader {
    tx: Sender<LoadMessage>,
    pub rx: Receiver<LoadMessage>,
    in_flight: HashSet<PathBuf>,
}

impl ImageLoader {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            in_flight: HashSet::new(),
        }
    }

    pub fn is_loading(&self, path: &Path) -> bool {
        self.in_flight.contains(path)
    }

    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// 收到结果后调用，从在途列表中移除
    pub fn finish(&mut self, path: &Path) {
        self.in_flight.remove(path);
    }

    /// 异步加载，同一路径在途时不重复发起
    pub fn load_async(&mut self, ctx: Context, path: PathBuf, is_priority: bool) {
        if !self.in_flight.insert(path.clone()) {
            return;
        }
        let tx = self.tx.clone();

        // 解码放到 rayon 全局线程池，快速翻页时线程数有上限
        rayon::spawn(move || {
            // 预加载的图让出 CPU
            if !is_priority {
                thread::yield_now();
            }

            let result = match decode_image(&path) {
                Ok(color_image) => {
                    let name = path.display().to_string();
                    LoadResult::Ok(ctx.load_texture(name, color_image, Default::default()))
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "image decode failed");
                    LoadResult::Err(e)
                }
            };
            let _ = tx.send(LoadMessage {
                path,
                result,
                is_priority,
            });
            ctx.request_repaint();
        });
    }
}

fn decode_image(path: &Path) -> Result<ColorImage, String> {
    let img = ImageReader::open(path)
        .map_err(|e| e.to_string())?
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .decode()
        .map_err(|e| e.to_string())?;

    let img = if img.width() > MAX_TEXTURE_SIDE || img.height() > MAX_TEXTURE_SIDE {
        img.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn decodes_png_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("px.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn load_async_sends_texture_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pair_a.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let ctx = Context::default();
        let mut loader = ImageLoader::new();
        loader.load_async(ctx.clone(), path.clone(), true);
        // 在途时同一路径不会重复发起
        loader.load_async(ctx, path.clone(), false);
        assert!(loader.is_loading(&path));

        let msg = loader.rx.recv_timeout(std::time::Duration::from_secs(10)).unwrap();
        assert_eq!(msg.path, path);
        assert!(msg.is_priority);
        assert!(matches!(msg.result, LoadResult::Ok(_)));
        assert!(loader.rx.recv_timeout(std::time::Duration::from_millis(200)).is_err());

        loader.finish(&path);
        assert!(!loader.has_pending());
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(decode_image(&path).is_err());
        assert!(decode_image(&dir.path().join("missing.png")).is_err());
    }
}
