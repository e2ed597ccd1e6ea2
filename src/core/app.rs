// ============================================
// App - Главный обработчик приложения
// ============================================
// Тик = кадр: позиция камеры читается один раз, стример
// синхронно доводит резидентное множество, потом рендер.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::render::{Camera, CameraController, GpuChunkManager, Renderer};
use crate::terrain::{ChunkStreamer, HeightField};

use super::config::EngineConfig;

/// Главное приложение
pub struct App {
    config: EngineConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Option<Camera>,
    controller: CameraController,
    streamer: ChunkStreamer<GpuChunkManager>,
    start: Instant,
    last_frame: Instant,
}

impl App {
    pub fn new(config: EngineConfig) -> Self {
        let field = HeightField::new(config.seed);
        let streamer = ChunkStreamer::new(field, config.render_distance);
        Self {
            config,
            window: None,
            renderer: None,
            camera: None,
            controller: CameraController::new(24.0, 0.0025),
            streamer,
            start: Instant::now(),
            last_frame: Instant::now(),
        }
    }

    /// Один тик: камера -> стриминг чанков -> кадр
    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(camera)) = (self.renderer.as_mut(), self.camera.as_mut())
        else {
            return;
        };

        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        self.controller.update_camera(camera, dt);
        self.streamer
            .update(&mut renderer.gpu_chunks, camera.position.x, camera.position.z);

        let time = (now - self.start).as_secs_f32();
        match renderer.render(camera, time) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    renderer.resize(window.inner_size());
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("frame skipped: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Terra - Chunked Voxel Terrain")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

        // Захватываем курсор при старте
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if grabbed.is_ok() {
            window.set_cursor_visible(false);
        }

        match Renderer::new(Arc::clone(&window)) {
            Ok(renderer) => {
                let size = window.inner_size();
                let mut camera = Camera::new(size.width as f32 / size.height.max(1) as f32);
                let mut renderer = renderer;

                // Первая загрузка чанков до первого кадра
                self.streamer.update(
                    &mut renderer.gpu_chunks,
                    camera.position.x,
                    camera.position.z,
                );
                camera.resize(size.width, size.height);

                self.renderer = Some(renderer);
                self.camera = Some(camera);
                self.window = Some(window);
                self.last_frame = Instant::now();
            }
            Err(e) => {
                log::error!("renderer init failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                if let Some(camera) = &mut self.camera {
                    camera.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(keycode),
                        state,
                        ..
                    },
                ..
            } => {
                if keycode == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    self.controller.process_keyboard(keycode, state.is_pressed());
                }
            }

            WindowEvent::RedrawRequested => self.tick(event_loop),

            _ => {}
        }
    }

    fn device_event(&mut self, _loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.controller.process_mouse(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
