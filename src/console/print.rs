use std::sync::atomic::{AtomicBool, Ordering};

static COLORED: AtomicBool = AtomicBool::new(false);

#[inline(always)]
pub fn is_colored() -> bool {
    COLORED.load(Ordering::SeqCst)
}

pub fn enable_color() {
    COLORED.store(true, Ordering::SeqCst)
}

pub mod style {
    use crossterm::style::{Color, Stylize};
    use std::fmt::{Display, Formatter};

    struct View<T: Display> {
        inner: T,
        color: Color,
    }

    impl<T: Display> Display for View<T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            if super::is_colored() {
                f.write_fmt(format_args!("{}", self.inner.to_string().with(self.color)))
            } else {
                self.inner.fmt(f)
            }
        }
    }

    /// Construct structure declaration to display data of the same kind (labels, values, etc.).
    /// A display style is applied only if color output is enabled.
    macro_rules! view_struct {
        ($name: ident, $color: expr) => {
            pub struct $name<T: Display>(View<T>);

            impl<T: Display> From<T> for $name<T> {
                fn from(value: T) -> Self {
                    Self(View {
                        inner: value,
                        color: $color,
                    })
                }
            }

            impl<T: Display> Display for $name<T> {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    self.0.fmt(f)
                }
            }
        };
    }

    view_struct!(LabelView, Color::Yellow);
    view_struct!(ValueView, Color::Green);
    view_struct!(ErrorView, Color::Red);
}
