use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::dom::listener::{Subscription, SCROLL_EVENTS};
use crate::dom::style;
use crate::dom::viewport::{self, Targets};
use crate::error::Result;
use crate::hooks::bind::bind_after_layout;
use crate::hooks::context::{use_motion, MotionContext};
use crate::motion::reveal::{BindPlan, Command, RevealMachine, RevealSpec};

/// A named reveal group: which elements, and how they enter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub label: &'static str,
    pub targets: Targets,
    pub spec: RevealSpec,
}

impl RevealGroup {
    pub const fn itself(label: &'static str, spec: RevealSpec) -> Self {
        Self {
            label,
            targets: Targets::Container,
            spec,
        }
    }

    pub const fn children(label: &'static str, spec: RevealSpec) -> Self {
        Self {
            label,
            targets: Targets::Children,
            spec,
        }
    }

    pub const fn matching(label: &'static str, selector: &'static str, spec: RevealSpec) -> Self {
        Self {
            label,
            targets: Targets::Selector(selector),
            spec,
        }
    }
}

/// Reveals `group` inside `container`, using the container itself as the
/// scroll trigger.
#[hook]
pub fn use_reveal(container: &NodeRef, group: RevealGroup) {
    let motion = use_motion();
    let container = container.clone();
    use_effect_with_deps(
        move |_| bind_after_layout(container, group.label, move |element| attach(element, group, &motion)),
        (),
    );
}

fn attach(container: &Element, group: RevealGroup, motion: &MotionContext) -> Option<RevealBinding> {
    match RevealBinding::bind(container, group, motion) {
        Ok(binding) => binding,
        Err(e) => {
            warn!("{}: animation unavailable ({}), showing content as-is", group.label, e);
            if let Ok(targets) = viewport::collect_targets(container, group.targets) {
                let _ = style::reveal_instantly(&targets, &group.spec.to);
            }
            None
        }
    }
}

type SubscriptionSlot = Rc<RefCell<Option<Subscription>>>;

/// Live state of one bound group. Dropping it stops observation and
/// cancels any pending cleanup.
struct RevealBinding {
    machine: Rc<RefCell<RevealMachine>>,
    pending: Rc<RefCell<Option<Timeout>>>,
    subscription: SubscriptionSlot,
}

impl RevealBinding {
    fn bind(container: &Element, group: RevealGroup, motion: &MotionContext) -> Result<Option<Self>> {
        let targets = viewport::collect_targets(container, group.targets)?;
        let spec = group.spec;
        let window = viewport::window();
        match spec.plan(targets.len(), motion.animate, window.is_ok()) {
            BindPlan::Skip => {
                debug!("{}: no targets, skipping", group.label);
                return Ok(None);
            }
            BindPlan::Instant(state) => {
                if let Err(e) = &window {
                    warn!("{}: {}, showing content as-is", group.label, e);
                }
                style::reveal_instantly(&targets, &state)?;
                return Ok(None);
            }
            BindPlan::Arm => {}
        }
        let window = window?;

        for target in &targets {
            style::set_instantly(target, &spec.from)?;
        }

        let machine = Rc::new(RefCell::new(RevealMachine::new(spec.trigger, spec.policy)));
        machine.borrow_mut().arm();
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let subscription: SubscriptionSlot = Rc::new(RefCell::new(None));

        let handler: Rc<dyn Fn()> = {
            let machine = Rc::clone(&machine);
            let pending = Rc::clone(&pending);
            let subscription = Rc::clone(&subscription);
            let container = container.clone();
            let window = window.clone();
            let label = group.label;
            Rc::new(move || {
                if machine.borrow().is_settled() {
                    return;
                }
                let viewport_height = match viewport::viewport_height(&window) {
                    Ok(height) => height,
                    Err(e) => {
                        warn!("{}: cannot read viewport ({}), revealing", label, e);
                        machine.borrow_mut().disarm();
                        let _ = style::reveal_instantly(&targets, &spec.to);
                        return;
                    }
                };
                let command = machine
                    .borrow_mut()
                    .observe(viewport::element_box(&container), viewport_height);
                if let Some(command) = command {
                    debug!("{}: {:?}", label, command);
                    // A settled group stops listening once its play finishes
                    let release = machine.borrow().is_settled().then(|| Rc::clone(&subscription));
                    if let Err(e) = run(&targets, &spec, command, &pending, release) {
                        warn!("{}: {:?} failed ({}), revealing", label, command, e);
                        machine.borrow_mut().disarm();
                        let _ = style::reveal_instantly(&targets, &spec.to);
                    }
                }
            })
        };

        // Content already past its trigger point plays right away
        handler();

        if !machine.borrow().is_settled() {
            *subscription.borrow_mut() = Some(Subscription::new(
                &window,
                &SCROLL_EVENTS,
                handler,
                motion.registry.register(group.label),
            )?);
        }

        Ok(Some(Self {
            machine,
            pending,
            subscription,
        }))
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.machine.borrow_mut().disarm();
        self.pending.borrow_mut().take();
        self.subscription.borrow_mut().take();
    }
}

fn run(
    targets: &[HtmlElement],
    spec: &RevealSpec,
    command: Command,
    pending: &RefCell<Option<Timeout>>,
    release: Option<SubscriptionSlot>,
) -> Result<()> {
    // A reversal in flight must not be cleaned up by an older play
    pending.borrow_mut().take();
    let settle_after = style::run_command(targets, spec, command)?;
    if command == Command::Play {
        let targets = targets.to_vec();
        let millis = (settle_after * 1000.0).ceil() as u32 + 50;
        *pending.borrow_mut() = Some(Timeout::new(millis, move || {
            for target in &targets {
                let _ = style::clear_transition(target);
            }
            if let Some(release) = release {
                release.borrow_mut().take();
            }
        }));
    }
    Ok(())
}
