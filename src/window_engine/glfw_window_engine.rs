use super::r#trait::{WindowEngine, WindowEvent};
use anyhow::{anyhow, Result};
use glfw::{Action, Context, Key};
use log::info;

use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| anyhow!("Impossible d'initialiser GLFW"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        // Surface de taille fixe : pas de redimensionnement.
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(
                width as u32,
                height as u32,
                title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW"))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        unsafe {
            show_opengl_context_info();
            setup_opengl_debug();
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        self.glfw.poll_events();

        // Bouton de fermeture ou Échap : même demande de sortie.
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::Close => Some(WindowEvent::CloseRequested),
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    Some(WindowEvent::CloseRequested)
                }
                _ => None,
            })
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_size()
    }
}
