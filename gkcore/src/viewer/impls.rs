use super::Viewer;

impl Viewer {
    pub const ANONYMOUS: Viewer = Viewer {
        privileged: false,
        authenticated: false,
    };

    pub fn anonymous() -> Self {
        Self::ANONYMOUS
    }

    /// A logged in member of the public.
    pub fn member() -> Self {
        Self {
            privileged: false,
            authenticated: true,
        }
    }

    pub fn staff() -> Self {
        Self {
            privileged: true,
            authenticated: true,
        }
    }

    /// An absent viewer is the anonymous visitor.
    pub fn or_anonymous(viewer: Option<&Viewer>) -> Self {
        viewer.copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::Viewer;

    #[test]
    fn or_anonymous() {
        assert_eq!(Viewer::or_anonymous(None), Viewer::ANONYMOUS);
        assert_eq!(Viewer::or_anonymous(Some(&Viewer::staff())), Viewer::staff());
        assert_eq!(Viewer::default(), Viewer::anonymous());
    }
}
