use thiserror::Error;

use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use gl_wrapper::buffer::BufferUsage;
use gl_wrapper::geometry::{GBError, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{PBError, ProgramBuilder};

use spinner::{FrameLoop, FrameStatus};
use spinner_common::exercise_loader::Exercise;

use crate::context::{GraphicsContext, WindowSettings};
use crate::sink::GlSink;

pub struct App {
    event_loop: EventLoop<()>,
    sink: GlSink,
    frame_loop: FrameLoop,
}

impl App {
    pub fn new(exercise: Exercise, settings: WindowSettings) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let context = GraphicsContext::new(&event_loop, &settings)?;

        let geometry = GeometryBuilder::new(exercise.store.as_slice(), exercise.store.indices())
            .with_attribute(VertexAttribute::Vec3)
            .with_usage(BufferUsage::DynamicDraw)
            .build()?;
        let program = ProgramBuilder::new(
            include_str!("gl_shaders/position.glsl"),
            include_str!("gl_shaders/solid.glsl"),
        )
        .build()?;

        let sink = GlSink::new(context, geometry, program, exercise.clear_color);
        let frame_loop = FrameLoop::new(exercise.store, exercise.policy);

        Ok(Self {
            event_loop,
            sink,
            frame_loop,
        })
    }

    pub fn run(self) -> ! {
        let Self {
            event_loop,
            mut sink,
            mut frame_loop,
        } = self;

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::RedrawEventsCleared => match frame_loop.step(&mut sink) {
                    Ok(FrameStatus::Continue) => sink.context().request_redraw(),
                    Ok(FrameStatus::Exit) => {
                        log::info!(
                            "closing after {} frames, {:?} rad covered",
                            frame_loop.frames(),
                            frame_loop.policy().angle().0
                        );
                        control_flow.set_exit();
                    }
                    Err(e) => {
                        log::error!("{e}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                },
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => sink.resize(size.width, size.height),
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                            && input.state == ElementState::Pressed
                        {
                            sink.request_close();
                        }
                    }
                    WindowEvent::CloseRequested => sink.request_close(),
                    _ => (),
                },
                _ => (),
            }
        })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create window: {0}")]
    Display(String),
    #[error("no window was created")]
    NoWindow,
    #[error("window has no area")]
    EmptyWindow,
    #[error("GL context: {0}")]
    Context(#[from] glutin::error::Error),
    #[error("shader program: {0}")]
    Program(#[from] PBError),
    #[error("geometry: {0}")]
    Geometry(#[from] GBError),
}
