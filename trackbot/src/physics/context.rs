use glam::Vec2;
use rapier2d::na::Isometry2;
use rapier2d::na::Vector2;
use rapier2d::prelude::*;

// Zero gravity; every body is fixed or kinematic, stepping integrates no
// motion of its own.
pub struct PhysicsContext {
    pub gravity: Vector2<f32>,
    pub rigidbodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: BroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub solver: CCDSolver,
}

impl PhysicsContext {
    pub fn new() -> Self {
        Self {
            gravity: Vector2::new(0.0, 0.0),
            rigidbodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            solver: CCDSolver::new(),
        }
    }

    pub fn step(&mut self, timestep: f32) {
        self.integration_parameters.dt = timestep;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigidbodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.solver,
            None,
            &(),
            &(),
        );
    }

    pub fn body_pose(&self, handle: RigidBodyHandle) -> (Vec2, f32) {
        let position = self.rigidbodies[handle].position();
        (Vec2::from(position.translation), position.rotation.angle())
    }

    pub fn set_body_pose(&mut self, handle: RigidBodyHandle, position: Vec2, rotation: f32) {
        debug_assert!(position.is_finite() && rotation.is_finite());
        self.rigidbodies[handle].set_position(Isometry2::new(Vector2::new(position.x, position.y), rotation), true);
    }
}

impl Default for PhysicsContext {
    fn default() -> Self {
        Self::new()
    }
}
