// ============================================
// Camera - Свободная камера
// ============================================
// Камера - единственный внешний вход движка чанков:
// её позиция раз в кадр уходит в стример.

use ultraviolet::{Mat4, Vec3};

/// Камера с перспективной проекцией
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,

    /// Параметры проекции
    pub aspect: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(8.0, 70.0, 8.0),
            yaw: -90.0_f32.to_radians(),
            pitch: -0.3,
            aspect,
            fov: 70.0_f32.to_radians(),
            near: 0.1,
            far: 2000.0,
        }
    }

    /// Направление взгляда камеры
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalized()
    }

    /// Вектор вправо
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::unit_y()).normalized()
    }

    /// Матрица вида (View Matrix)
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.forward();
        Mat4::look_at(self.position, target, Vec3::unit_y())
    }

    /// Матрица проекции (Perspective с Reversed-Z для лучшей точности вдали)
    pub fn projection_matrix(&self) -> Mat4 {
        // Reversed-Z: меняем near и far местами
        ultraviolet::projection::perspective_wgpu_dx(self.fov, self.aspect, self.far, self.near)
    }

    /// Комбинированная матрица View-Projection
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }
}

/// Контроллер камеры (WASD + мышь)
pub struct CameraController {
    pub speed: f32,
    pub sensitivity: f32,

    // Состояние клавиш
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,

    // Дельта мыши
    mouse_dx: f32,
    mouse_dy: f32,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            speed,
            sensitivity,
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
        }
    }

    pub fn process_keyboard(&mut self, key: winit::keyboard::KeyCode, pressed: bool) {
        use winit::keyboard::KeyCode;
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::Space => self.up = pressed,
            KeyCode::ShiftLeft => self.down = pressed,
            _ => {}
        }
    }

    pub fn process_mouse(&mut self, dx: f64, dy: f64) {
        self.mouse_dx += dx as f32;
        self.mouse_dy += dy as f32;
    }

    pub fn update_camera(&mut self, camera: &mut Camera, dt: f32) {
        // Поворот
        camera.yaw += self.mouse_dx * self.sensitivity;
        camera.pitch -= self.mouse_dy * self.sensitivity;
        camera.pitch = camera.pitch.clamp(-1.54, 1.54);
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;

        // Полёт
        let fwd = camera.forward();
        let right = camera.right();
        let mut velocity = Vec3::zero();
        if self.forward {
            velocity += fwd;
        }
        if self.backward {
            velocity -= fwd;
        }
        if self.right {
            velocity += right;
        }
        if self.left {
            velocity -= right;
        }
        if self.up {
            velocity += Vec3::unit_y();
        }
        if self.down {
            velocity -= Vec3::unit_y();
        }

        if velocity.mag_sq() > 0.0 {
            camera.position += velocity.normalized() * self.speed * dt;
        }
    }
}
