//! 表盘事件循环

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_graphics::{pixelcolor::Rgb888, prelude::DrawTarget};
use sundrive_common::*;

use crate::app::WatchFace;
use crate::render::GraphicsCanvas;

/// 表盘主循环
///
/// 每次被唤醒后先处理队列里已有的全部事件，再按需重绘一次，
/// 同一批事件只产生一帧。收到 Exit 后退订全部服务并返回。
pub async fn face_main<P, M, D, F>(
    face: &mut WatchFace<P>,
    events: FaceEventReceiver<'_, M>,
    target: &mut D,
    mut on_frame: F,
) -> SystemResult<()>
where
    P: Platform,
    M: RawMutex,
    D: DrawTarget<Color = Rgb888>,
    F: FnMut(&D),
{
    info!("sundrive starting...");
    face.start();
    render_frame(face, target, &mut on_frame);

    loop {
        let mut running = face.handle_event(events.receive().await);

        while running {
            match events.try_receive() {
                Ok(event) => running = face.handle_event(event),
                Err(_) => break,
            }
        }

        if !running {
            face.stop();
            info!("Event loop finished");
            return Ok(());
        }

        if face.is_dirty() {
            render_frame(face, target, &mut on_frame);
        }
    }
}

fn render_frame<P, D, F>(face: &mut WatchFace<P>, target: &mut D, on_frame: &mut F)
where
    P: Platform,
    D: DrawTarget<Color = Rgb888>,
    F: FnMut(&D),
{
    let result = face.render(&mut GraphicsCanvas::new(target));
    match result {
        Ok(()) => on_frame(target),
        Err(e) => error!("Failed to render frame: {:?}", e),
    }
}
