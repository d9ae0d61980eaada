mod loadable;
